//! Serializable templates for parts, medals, and combatants.
//!
//! Specs are the on-disk shape of content. They carry maximums and
//! modifiers only; materializing a spec produces a fresh battle-scoped
//! [`CombatantState`] at full durability with an empty gauge.

use battle_core::{
    CombatantId, CombatantState, ForceTechnique, Gauge, Medal, MedalAffinity, Part, PartKind,
    PartSlot, ResourceMeter, Side,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Template for one equipped part.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartSpec {
    pub slot: PartSlot,
    pub kind: PartKind,
    pub name: String,
    pub power: u32,
    pub accuracy: i32,
    pub speed: i32,
    pub durability: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub uses: Option<u8>,
    /// Defaults to vital for head parts when omitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vital: Option<bool>,
}

impl PartSpec {
    pub fn materialize(&self) -> Part {
        Part {
            slot: self.slot,
            kind: self.kind,
            name: self.name.clone(),
            power: self.power,
            accuracy: self.accuracy,
            speed: self.speed,
            durability: ResourceMeter::at_max(self.durability),
            uses: self.uses,
            vital: self.vital.unwrap_or(self.slot == PartSlot::Head),
        }
    }
}

/// Template for a medaforce technique.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TechniqueSpec {
    pub name: String,
    pub kind: PartKind,
    pub power: u32,
    pub unlock_level: u8,
}

/// Template for a medal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MedalSpec {
    pub name: String,
    pub affinity: MedalAffinity,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub techniques: Vec<TechniqueSpec>,
}

#[cfg(feature = "serde")]
fn default_level() -> u8 {
    1
}

impl MedalSpec {
    pub fn materialize(&self) -> Medal {
        let mut techniques = arrayvec::ArrayVec::new();
        for spec in self
            .techniques
            .iter()
            .take(battle_core::BattleConfig::MAX_TECHNIQUES)
        {
            techniques.push(ForceTechnique {
                name: spec.name.clone(),
                kind: spec.kind,
                power: spec.power,
                unlock_level: spec.unlock_level,
            });
        }
        Medal {
            name: self.name.clone(),
            affinity: self.affinity,
            exp: self.exp,
            level: self.level,
            force: Gauge::EMPTY,
            techniques,
        }
    }
}

/// Template for a full combatant: medal plus up to four parts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub medal: MedalSpec,
    pub parts: Vec<PartSpec>,
}

impl CombatantSpec {
    /// Builds a battle-ready combatant. The id and side are placeholders;
    /// the battle session reassigns both positionally.
    pub fn materialize(&self) -> CombatantState {
        let mut parts: [Option<Part>; PartSlot::COUNT] = Default::default();
        for spec in &self.parts {
            parts[spec.slot.index()] = Some(spec.materialize());
        }
        CombatantState::new(
            CombatantId(0),
            self.name.clone(),
            Side::Enemy,
            parts,
            self.medal.materialize(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_parts_default_to_vital() {
        let spec = PartSpec {
            slot: PartSlot::Head,
            kind: PartKind::Ranged,
            name: "Antenna".into(),
            power: 12,
            accuracy: 4,
            speed: 2,
            durability: 35,
            uses: Some(3),
            vital: None,
        };
        assert!(spec.materialize().vital);

        let arm = PartSpec {
            slot: PartSlot::RightArm,
            vital: None,
            ..spec
        };
        assert!(!arm.materialize().vital);
    }

    #[test]
    fn duplicate_slots_keep_the_last_spec() {
        let part = |name: &str| PartSpec {
            slot: PartSlot::LeftArm,
            kind: PartKind::Melee,
            name: name.into(),
            power: 10,
            accuracy: 0,
            speed: 1,
            durability: 20,
            uses: None,
            vital: None,
        };
        let spec = CombatantSpec {
            name: "Doubled".into(),
            medal: MedalSpec {
                name: "Test".into(),
                affinity: MedalAffinity::Melee,
                level: 1,
                exp: 0,
                techniques: vec![],
            },
            parts: vec![part("first"), part("second")],
        };
        let combatant = spec.materialize();
        assert_eq!(
            combatant.part(PartSlot::LeftArm).unwrap().name,
            "second"
        );
        assert!(combatant.part(PartSlot::Head).is_none());
    }
}
