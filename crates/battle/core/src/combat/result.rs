//! Resolution outcome type.

use crate::state::CombatantId;

use super::advantage::Advantage;

/// What shape the resolved action took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResolvedKind {
    Attack,
    Force,
    Support,
    Defend,
}

/// Complete outcome of one resolution.
///
/// Produced once by the resolver, read by the presentation layer and the
/// battle-end check, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedAction {
    pub attacker: CombatantId,
    pub target: CombatantId,
    pub kind: ResolvedKind,
    pub hit: bool,
    pub critical: bool,
    /// Damage actually computed. Zero on miss, defend, and support.
    pub damage: u32,
    /// Matchup multiplier that was applied.
    pub advantage: Advantage,
    /// Whether this hit destroyed the targeted part.
    pub part_destroyed: bool,
    /// Whether the target was knocked out as a result of this resolution.
    pub target_knocked_out: bool,
    /// Durability restored by a support action.
    pub heal: u32,
    /// Deterministic human-readable account for the battle log.
    pub narration: String,
}
