//! Type advantage between attack kind and target medal affinity.

use crate::env::DamageParams;
use crate::state::{MedalAffinity, PartKind};

/// Matchup classification applied to a damage computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advantage {
    Favorable,
    Neutral,
    Unfavorable,
}

/// Classify an attack kind against the defender's medal affinity.
///
/// The triangle: melee punishes ranged-natured medals, ranged punishes
/// support-natured medals, support-natured medals' own strikes punish
/// melee-natured medals. Support parts heal and never reach this table.
pub fn classify(attack: PartKind, defender: MedalAffinity) -> Advantage {
    match (attack, defender) {
        (PartKind::Melee, MedalAffinity::Ranged)
        | (PartKind::Ranged, MedalAffinity::Support) => Advantage::Favorable,
        (PartKind::Melee, MedalAffinity::Support)
        | (PartKind::Ranged, MedalAffinity::Melee) => Advantage::Unfavorable,
        (PartKind::Melee, MedalAffinity::Melee)
        | (PartKind::Ranged, MedalAffinity::Ranged) => Advantage::Neutral,
        // Support and inert parts never deal typed damage.
        (PartKind::Support | PartKind::Inert, _) => Advantage::Neutral,
    }
}

/// Applies the matchup fraction from the damage tables.
pub fn scale(damage: u32, advantage: Advantage, params: &DamageParams) -> u32 {
    match advantage {
        Advantage::Favorable => damage * params.advantage_num / params.advantage_den,
        Advantage::Neutral => damage,
        Advantage::Unfavorable => damage * params.disadvantage_num / params.disadvantage_den,
    }
}
