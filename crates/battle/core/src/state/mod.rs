//! Authoritative battle session state.
//!
//! This module owns the data describing both squads, phase bookkeeping, and
//! the narration log. Outer layers clone or query this state but mutate it
//! exclusively through [`crate::engine::BattleEngine`].

mod digest;
mod error;
pub mod types;

pub use digest::StateDigest;
pub use error::InitializationError;
pub use types::{
    BattleLog, BattleOutcome, BattlePhase, CombatantFlags, CombatantId, CombatantState,
    ForceTechnique, Gauge, LogEntry, Medal, MedalAffinity, Part, PartKind, PartSlot,
    PendingSelection, PendingSource, PhaseTag, ResourceMeter, RosterState, Side,
};

use crate::config::BattleConfig;

/// Canonical snapshot of one battle session.
///
/// Created when a battle node is entered, discarded when the battle reaches
/// a terminal phase; surviving ally state is copied back to the persistent
/// roster by the caller, not by this type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// RNG seed fixed at session start. Combined with `nonce` to derive a
    /// unique seed for every random draw, which makes the whole battle
    /// replayable from (seed, command stream).
    pub battle_seed: u64,

    /// Sequential dispatch counter. Increments once per dispatched action.
    pub nonce: u64,

    /// Accumulated battle time in milliseconds (charging and lock phases).
    pub clock_ms: u64,

    /// Number of dispatched actions so far; keys the log entries.
    pub turn_count: u32,

    pub phase: BattlePhase,
    pub roster: RosterState,

    /// The in-progress player declaration, present only in selection phases.
    pub pending: Option<PendingSelection>,

    pub log: BattleLog,
}

impl BattleState {
    /// Builds a session from materialized squads.
    ///
    /// Combatant IDs and sides are (re)assigned positionally: allies first,
    /// then the opposing squad. IDs are session-scoped and never reused.
    pub fn new(
        battle_seed: u64,
        allies: Vec<CombatantState>,
        enemies: Vec<CombatantState>,
    ) -> Result<Self, InitializationError> {
        let mut roster = RosterState::default();
        let mut next_id = 0u32;

        for (side, squad, out) in [
            (Side::Ally, allies, &mut roster.allies),
            (Side::Enemy, enemies, &mut roster.enemies),
        ] {
            if squad.is_empty() {
                return Err(InitializationError::EmptySquad { side });
            }
            let len = squad.len();
            if len > BattleConfig::MAX_SQUAD {
                return Err(InitializationError::SquadTooLarge { side, len });
            }
            for mut combatant in squad {
                combatant.id = CombatantId(next_id);
                combatant.side = side;
                combatant.gauge = Gauge::EMPTY;
                combatant.refresh_knockout();
                next_id += 1;
                out.push(combatant)
                    .map_err(|_| InitializationError::SquadTooLarge { side, len })?;
            }
        }

        for side in [Side::Ally, Side::Enemy] {
            if roster.is_wiped(side) {
                return Err(InitializationError::SquadAlreadyDown { side });
            }
        }

        Ok(Self {
            battle_seed,
            nonce: 0,
            clock_ms: 0,
            turn_count: 0,
            phase: BattlePhase::Charging,
            roster,
            pending: None,
            log: BattleLog::default(),
        })
    }

    /// The combatant currently awaiting a player decision, if any.
    pub fn awaiting(&self) -> Option<CombatantId> {
        self.pending.as_ref().map(|p| p.combatant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Medal, MedalAffinity, Part, PartKind};

    fn unit(name: &str) -> CombatantState {
        let part = Part {
            slot: PartSlot::Head,
            kind: PartKind::Ranged,
            name: "Probe".into(),
            power: 10,
            accuracy: 5,
            speed: 4,
            durability: ResourceMeter::at_max(20),
            uses: None,
            vital: true,
        };
        CombatantState::new(
            CombatantId(99),
            name,
            Side::Enemy,
            [Some(part), None, None, None],
            Medal {
                name: "Scrap".into(),
                affinity: MedalAffinity::Ranged,
                exp: 0,
                level: 1,
                force: Gauge::EMPTY,
                techniques: Default::default(),
            },
        )
    }

    #[test]
    fn ids_and_sides_are_reassigned_positionally() {
        let state = BattleState::new(7, vec![unit("a"), unit("b")], vec![unit("c")]).unwrap();
        let ids: Vec<u32> = state.roster.all().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(state.roster.allies.iter().all(|c| c.side == Side::Ally));
        assert!(state.roster.enemies.iter().all(|c| c.side == Side::Enemy));
    }

    #[test]
    fn empty_squads_are_rejected() {
        let err = BattleState::new(7, vec![], vec![unit("c")]).unwrap_err();
        assert_eq!(err, InitializationError::EmptySquad { side: Side::Ally });
    }
}
