//! Medals: the evolving core of a combatant.
//!
//! A medal accumulates experience across battles and gates the medaforce
//! techniques, which draw on a separate charge-like resource filled by
//! dealing and receiving damage.

use arrayvec::ArrayVec;

use super::common::Gauge;
use super::part::PartKind;
use crate::config::BattleConfig;

/// Combat specialty imprinted on a medal.
///
/// Type advantage is a closed triangle against the attacking kind:
/// melee beats ranged-natured medals, ranged beats support-natured medals,
/// support-natured medals resist nothing but punish melee.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MedalAffinity {
    #[default]
    Melee,
    Ranged,
    Support,
}

/// A high-power attack unlocked by medal level and paid for with a full
/// medaforce gauge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceTechnique {
    pub name: String,
    /// Attack kind used for the type-advantage match. Offensive only.
    pub kind: PartKind,
    pub power: u32,
    pub unlock_level: u8,
}

/// The persistent medal resource slotted into a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Medal {
    pub name: String,
    pub affinity: MedalAffinity,
    pub exp: u32,
    pub level: u8,
    /// Medaforce charge. Fills from damage dealt and taken, empties on use.
    pub force: Gauge,
    pub techniques: ArrayVec<ForceTechnique, { BattleConfig::MAX_TECHNIQUES }>,
}

impl Medal {
    /// Experience required to advance from `level` to the next.
    fn exp_to_next(level: u8) -> u32 {
        100 * level as u32
    }

    /// Adds experience, advancing levels as thresholds are crossed.
    pub fn gain_exp(&mut self, amount: u32) {
        self.exp += amount;
        while self.level < u8::MAX && self.exp >= Self::exp_to_next(self.level) {
            self.exp -= Self::exp_to_next(self.level);
            self.level += 1;
        }
    }

    pub fn gain_force(&mut self, points: u32) {
        self.force.charge(points);
    }

    /// The strongest technique currently unlocked and payable, if any.
    ///
    /// Returns the index into `techniques` alongside the technique so a
    /// declaration can reference it without cloning.
    pub fn ready_technique(&self) -> Option<(usize, &ForceTechnique)> {
        if !self.force.is_full() {
            return None;
        }
        self.techniques
            .iter()
            .enumerate()
            .filter(|(_, t)| t.unlock_level <= self.level)
            .max_by_key(|(_, t)| t.power)
    }

    /// Spends the full medaforce gauge on a technique activation.
    pub fn spend_force(&mut self) {
        self.force.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medal() -> Medal {
        let mut techniques = ArrayVec::new();
        techniques.push(ForceTechnique {
            name: "Beam Burst".into(),
            kind: PartKind::Ranged,
            power: 60,
            unlock_level: 1,
        });
        techniques.push(ForceTechnique {
            name: "Giga Crusher".into(),
            kind: PartKind::Melee,
            power: 90,
            unlock_level: 5,
        });
        Medal {
            name: "Kabuto".into(),
            affinity: MedalAffinity::Ranged,
            exp: 0,
            level: 1,
            force: Gauge::EMPTY,
            techniques,
        }
    }

    #[test]
    fn exp_carries_over_level_thresholds() {
        let mut medal = medal();
        medal.gain_exp(350);
        // 100 to reach 2, 200 to reach 3, 50 left over.
        assert_eq!(medal.level, 3);
        assert_eq!(medal.exp, 50);
    }

    #[test]
    fn technique_requires_full_force_and_level() {
        let mut medal = medal();
        assert!(medal.ready_technique().is_none());

        medal.gain_force(Gauge::FULL.0);
        let (_, technique) = medal.ready_technique().expect("unlocked at level 1");
        assert_eq!(technique.name, "Beam Burst");

        // The level-5 technique wins once unlocked.
        medal.level = 5;
        let (_, technique) = medal.ready_technique().expect("still charged");
        assert_eq!(technique.name, "Giga Crusher");

        medal.spend_force();
        assert!(medal.ready_technique().is_none());
    }
}
