//! Session worker that owns the authoritative [`BattleState`].
//!
//! Receives commands from [`crate::SessionHandle`], drives the engine, and
//! publishes drained engine events to the bus. The worker is the single
//! writer for the session: ticks and player commands arrive on one channel,
//! so every mutation is strictly serialized and the battle is replayable
//! from the command order alone.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use battle_core::{
    BattleEngine, BattleEnv, BattleEvent, BattleOutcome, BattleRewards, BattleState,
    CombatTables, CombatantState, LogEntry, PartSlot, PcgRng,
};

use crate::events::EventBus;

/// Player selection commands, mirrored one-to-one onto the engine surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    SelectPart(PartSlot),
    SelectTarget(usize),
    SelectTargetPart(PartSlot),
    ConfirmAction,
    ConfirmDefend,
    ConfirmForce,
    Cancel,
}

/// Commands that can be sent to the session worker.
pub enum Command {
    /// Advance battle time by one tick delta.
    Advance {
        delta_ms: u32,
        reply: oneshot::Sender<()>,
    },
    /// Apply a player selection command.
    Player {
        command: PlayerCommand,
        reply: oneshot::Sender<()>,
    },
    /// Query a read-only snapshot of the battle state.
    QueryState {
        reply: oneshot::Sender<BattleState>,
    },
    /// Abandon the session immediately.
    Forfeit { reply: oneshot::Sender<()> },
}

/// How the session concluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The battle reached `BattleOver`. Carries the reward summary and the
    /// ally squad's final state for the roster write-back.
    Completed {
        outcome: BattleOutcome,
        rewards: BattleRewards,
        roster: Vec<CombatantState>,
        log: Vec<LogEntry>,
    },
    /// The player left mid-battle; nothing is written back.
    Forfeited,
}

/// Background task that serializes all session mutations.
pub struct SessionWorker {
    state: BattleState,
    tables: CombatTables,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    outcome_tx: Option<oneshot::Sender<SessionOutcome>>,
}

impl SessionWorker {
    pub fn new(
        state: BattleState,
        tables: CombatTables,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        outcome_tx: oneshot::Sender<SessionOutcome>,
    ) -> Self {
        info!(
            allies = state.roster.allies.len(),
            enemies = state.roster.enemies.len(),
            seed = state.battle_seed,
            "session worker initialized"
        );
        Self {
            state,
            tables,
            command_rx,
            event_bus,
            outcome_tx: Some(outcome_tx),
        }
    }

    /// Main worker loop. Ends when the session concludes or every handle
    /// is dropped.
    pub async fn run(mut self) {
        while let Some(command) = self.command_rx.recv().await {
            if self.handle_command(command) {
                break;
            }
        }
        debug!("session worker stopped");
    }

    /// Applies one command. Returns `true` when the worker should stop.
    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Advance { delta_ms, reply } => {
                let done = self.drive(|engine, env| engine.tick(delta_ms, env));
                let _ = reply.send(());
                done
            }
            Command::Player { command, reply } => {
                debug!(?command, "player command");
                let done = self.drive(|engine, env| apply_player_command(engine, env, command));
                let _ = reply.send(());
                done
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
                false
            }
            Command::Forfeit { reply } => {
                info!("session forfeited");
                if let Some(tx) = self.outcome_tx.take() {
                    let _ = tx.send(SessionOutcome::Forfeited);
                }
                let _ = reply.send(());
                true
            }
        }
    }

    /// Runs one engine call batch, publishes its events, and finalizes the
    /// session when a terminal event appears.
    fn drive(&mut self, f: impl FnOnce(&mut BattleEngine<'_>, &BattleEnv<'_>)) -> bool {
        let rng = PcgRng;
        let env = BattleEnv::new(&self.tables, &rng);
        let mut engine = BattleEngine::new(&mut self.state);
        f(&mut engine, &env);
        let events = engine.take_events();

        let mut concluded = None;
        for event in events {
            if let BattleEvent::BattleEnded { outcome, rewards } = &event {
                concluded = Some((*outcome, rewards.clone()));
            }
            self.event_bus.publish(event);
        }

        match concluded {
            Some((outcome, rewards)) => {
                info!(?outcome, "battle concluded");
                if let Some(tx) = self.outcome_tx.take() {
                    let _ = tx.send(SessionOutcome::Completed {
                        outcome,
                        rewards,
                        roster: self.state.roster.allies.iter().cloned().collect(),
                        log: self.state.log.entries().to_vec(),
                    });
                }
                true
            }
            None => false,
        }
    }
}

fn apply_player_command(
    engine: &mut BattleEngine<'_>,
    env: &BattleEnv<'_>,
    command: PlayerCommand,
) {
    match command {
        PlayerCommand::SelectPart(slot) => engine.select_offensive_part(slot),
        PlayerCommand::SelectTarget(index) => engine.select_target_combatant(index),
        PlayerCommand::SelectTargetPart(slot) => engine.select_target_part(slot),
        PlayerCommand::ConfirmAction => engine.confirm_action(env),
        PlayerCommand::ConfirmDefend => engine.confirm_defend(env),
        PlayerCommand::ConfirmForce => engine.confirm_force(),
        PlayerCommand::Cancel => engine.cancel_selection(),
    }
}
