//! Declared actions: the input to one resolution.

use crate::state::{CombatantId, PartSlot};

/// What a declaration uses as its acting source.
///
/// Closed set; the resolver matches exhaustively so every new source kind
/// must state its hit, damage, and narration behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionSource {
    /// An equipped part, by slot.
    Part(PartSlot),
    /// A medaforce technique, by index into the attacker's medal.
    Force(usize),
    /// Brace for the next incoming resolution. No target.
    Defend,
}

/// A fully specified action, built fresh for every resolution and consumed
/// exactly once by the resolver. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclaredAction {
    pub attacker: CombatantId,
    pub source: ActionSource,
    /// For `Defend` this is the attacker itself.
    pub target: CombatantId,
    pub target_slot: PartSlot,
    /// Effective speed at declaration time, plus a bonus for medaforce.
    /// Recorded for the log; dispatch order is decided by the scheduler.
    pub priority: i32,
}

impl DeclaredAction {
    pub fn defend(attacker: CombatantId, priority: i32) -> Self {
        Self {
            attacker,
            source: ActionSource::Defend,
            target: attacker,
            target_slot: PartSlot::Head,
            priority,
        }
    }
}
