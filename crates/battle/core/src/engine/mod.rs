//! Battle state machine and action execution pipeline.
//!
//! [`BattleEngine`] is the authoritative reducer for [`BattleState`]: the
//! scheduler, the player command surface, and the resolution pipeline all
//! mutate state exclusively through it. Construct one per call batch, drive
//! it, then drain the event outbox.
//!
//! The phase loop: `Charging` runs the gauge scheduler each tick; a ready
//! machine combatant synthesizes and resolves inline; a ready player
//! combatant parks the clock in the selection phases until a declaration is
//! confirmed. Every resolution passes the battle-end check before the
//! scheduler resumes.

mod commands;
mod events;
mod resolve;
mod rewards;
mod scheduler;

pub use events::BattleEvent;
pub use rewards::BattleRewards;

use crate::env::BattleEnv;
use crate::state::{BattlePhase, BattleState, PendingSelection, Side};

/// Authoritative mutator for one battle session.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    events: Vec<BattleEvent>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Drains the events accumulated by calls on this engine, in order.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advances battle time by `delta_ms`.
    ///
    /// Phase-dependent: gauges only move in `Charging`; the selection
    /// phases park the clock entirely; `Executing` drains its lock. A
    /// terminal session ignores ticks.
    pub fn tick(&mut self, delta_ms: u32, env: &BattleEnv<'_>) {
        match self.state.phase {
            BattlePhase::BattleOver { .. } => {}
            BattlePhase::ActionMenu | BattlePhase::PartSelect | BattlePhase::TargetSelect => {}
            BattlePhase::Executing { lock_ms } => {
                self.state.clock_ms += u64::from(delta_ms);
                if delta_ms >= lock_ms {
                    self.set_phase(BattlePhase::Charging);
                } else {
                    self.state.phase = BattlePhase::Executing {
                        lock_ms: lock_ms - delta_ms,
                    };
                }
            }
            BattlePhase::Charging => {
                self.state.clock_ms += u64::from(delta_ms);
                self.advance_gauges(delta_ms, env);

                if let Some(ready) = self.select_ready() {
                    match self
                        .state
                        .roster
                        .combatant(ready)
                        .map(|c| c.side)
                        .unwrap_or(Side::Enemy)
                    {
                        Side::Enemy => self.run_machine_turn(ready, env),
                        Side::Ally => {
                            self.state.pending = Some(PendingSelection::new(ready));
                            self.set_phase(BattlePhase::ActionMenu);
                        }
                    }
                }
            }
        }
    }

    /// Transitions phase, emitting the change event when the tag differs.
    fn set_phase(&mut self, phase: BattlePhase) {
        let changed = self.state.phase.tag() != phase.tag();
        self.state.phase = phase;
        if changed {
            self.events.push(BattleEvent::PhaseChanged {
                phase: self.state.phase.tag(),
            });
        }
    }
}
