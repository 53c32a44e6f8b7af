//! Events surfaced by the engine outbox.
//!
//! The engine pushes each event exactly once as the transition happens; the
//! caller drains the outbox after every call and forwards events to the
//! presentation layer. Nothing here is load-bearing for the battle itself;
//! replaying state never depends on whether anyone listened.

use crate::combat::ResolvedAction;
use crate::state::{BattleOutcome, PhaseTag};

use super::rewards::BattleRewards;

/// High-level battle occurrences, in dispatch order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// The state machine changed phase. Emitted on every transition.
    PhaseChanged { phase: PhaseTag },

    /// One action resolved. Emitted exactly once per resolution.
    ActionResolved(ResolvedAction),

    /// The session reached a terminal phase. Emitted exactly once.
    BattleEnded {
        outcome: BattleOutcome,
        rewards: BattleRewards,
    },
}
