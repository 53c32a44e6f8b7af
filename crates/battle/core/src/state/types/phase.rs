//! Battle phases and the selection scratchpad.

use super::common::CombatantId;
use super::part::PartSlot;

/// Terminal outcome of a battle session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Current phase of the battle state machine.
///
/// The loop is `Charging → (selection states | inline AI turn) → Executing →
/// Charging` until `BattleOver`, which is terminal. Gauges only advance in
/// `Charging`; the selection states park the clock entirely, and `Executing`
/// holds a presentation lock that drains with tick deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    /// Gauges filling; the scheduler picks who acts next.
    Charging,
    /// A player combatant is ready; waiting on the top-level choice.
    ActionMenu,
    /// Back-navigation landing state while a part is highlighted.
    PartSelect,
    /// Choosing the target combatant and part slot.
    TargetSelect,
    /// Presentation lock after a resolution, in milliseconds remaining.
    Executing { lock_ms: u32 },
    /// Terminal. Entered at most once per session.
    BattleOver { outcome: BattleOutcome },
}

impl BattlePhase {
    /// Payload-free tag for events and UI control switching.
    pub fn tag(&self) -> PhaseTag {
        match self {
            BattlePhase::Charging => PhaseTag::Charging,
            BattlePhase::ActionMenu => PhaseTag::ActionMenu,
            BattlePhase::PartSelect => PhaseTag::PartSelect,
            BattlePhase::TargetSelect => PhaseTag::TargetSelect,
            BattlePhase::Executing { .. } => PhaseTag::Executing,
            BattlePhase::BattleOver { .. } => PhaseTag::BattleOver,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BattlePhase::BattleOver { .. })
    }

    /// Whether the phase accepts player selection commands.
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            BattlePhase::ActionMenu | BattlePhase::PartSelect | BattlePhase::TargetSelect
        )
    }
}

/// Discriminant-only view of [`BattlePhase`], carried on phase-change events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PhaseTag {
    Charging,
    ActionMenu,
    PartSelect,
    TargetSelect,
    Executing,
    BattleOver,
}

/// Scratchpad for the player's in-progress declaration.
///
/// Holds indices, not references; candidates are recomputed against the live
/// roster and the stored index is re-clamped on every read, so a stale
/// selection can never name an invalid target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingSelection {
    /// The ready player combatant this selection belongs to.
    pub combatant: CombatantId,
    pub source: Option<PendingSource>,
    /// Index into the current candidate-target list.
    pub target_index: usize,
    pub target_slot: PartSlot,
}

/// What the player has picked as the acting part so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PendingSource {
    Part(PartSlot),
    /// Medaforce technique by index into the medal's technique list.
    Force(usize),
}

impl PendingSelection {
    pub fn new(combatant: CombatantId) -> Self {
        Self {
            combatant,
            source: None,
            target_index: 0,
            target_slot: PartSlot::Head,
        }
    }
}
