//! High-level session orchestrator.
//!
//! The runtime owns the session worker, wires up command and event
//! channels, and exposes a builder-based API. Clients get a cloneable
//! [`SessionHandle`] for input and event streams, and await the final
//! [`SessionOutcome`] for the roster write-back.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use battle_core::{BattleState, CombatTables, CombatantState};

use crate::api::{Result, RuntimeError, SessionHandle};
use crate::events::EventBus;
use crate::workers::{Command, SessionOutcome, SessionWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Real-time tick cadence. `None` disables the tick task so a test or
    /// replay driver can feed synthetic deltas through the handle.
    pub tick_interval: Option<Duration>,
    /// Battle-time delta carried by each automatic tick.
    pub tick_delta_ms: u32,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval: Some(Duration::from_millis(50)),
            tick_delta_ms: 50,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates one battle session.
pub struct BattleRuntime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
    ticker_handle: Option<JoinHandle<()>>,
    outcome_rx: oneshot::Receiver<SessionOutcome>,
}

impl BattleRuntime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// A cloneable handle for commands and event subscriptions.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Waits for the session to conclude (battle over or forfeit) and
    /// returns the outcome for the roster write-back.
    pub async fn join(self) -> Result<SessionOutcome> {
        let outcome = self
            .outcome_rx
            .await
            .map_err(RuntimeError::ReplyChannelClosed)?;

        if let Some(ticker) = self.ticker_handle {
            ticker.abort();
        }
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(outcome)
    }
}

/// Builder for [`BattleRuntime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    tables: CombatTables,
    seed: Option<u64>,
    allies: Option<Vec<CombatantState>>,
    enemies: Option<Vec<CombatantState>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            tables: CombatTables::default(),
            seed: None,
            allies: None,
            enemies: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Balance tables, typically loaded by `battle-content`.
    pub fn tables(mut self, tables: CombatTables) -> Self {
        self.tables = tables;
        self
    }

    /// Fixes the session seed. Defaults to fresh entropy; fix it for
    /// replays and tests.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Ally squad snapshot from the persistent roster.
    pub fn allies(mut self, allies: Vec<CombatantState>) -> Self {
        self.allies = Some(allies);
        self
    }

    /// Opposing squad, usually from `battle_content::OpponentGenerator`.
    pub fn enemies(mut self, enemies: Vec<CombatantState>) -> Self {
        self.enemies = Some(enemies);
        self
    }

    /// Builds the runtime and spawns its workers.
    pub fn build(self) -> Result<BattleRuntime> {
        let allies = self.allies.ok_or(RuntimeError::MissingAllies)?;
        let enemies = self.enemies.ok_or(RuntimeError::MissingEnemies)?;
        let seed = self.seed.unwrap_or_else(rand::random);

        let state = BattleState::new(seed, allies, enemies)?;

        let event_bus = EventBus::new(self.config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);
        let (outcome_tx, outcome_rx) = oneshot::channel();

        let worker = SessionWorker::new(
            state,
            self.tables,
            command_rx,
            event_bus.clone(),
            outcome_tx,
        );
        let worker_handle = tokio::spawn(worker.run());

        let ticker_handle = self.config.tick_interval.map(|period| {
            let tick_tx = command_tx.clone();
            let delta_ms = self.config.tick_delta_ms;
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                loop {
                    interval.tick().await;
                    let (reply_tx, _reply_rx) = oneshot::channel();
                    if tick_tx
                        .send(Command::Advance {
                            delta_ms,
                            reply: reply_tx,
                        })
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
            })
        });

        Ok(BattleRuntime {
            handle: SessionHandle::new(command_tx, event_bus),
            worker_handle,
            ticker_handle,
            outcome_rx,
        })
    }
}
