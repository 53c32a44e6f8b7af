//! Cloneable façade for issuing commands to a running session.
//!
//! [`SessionHandle`] hides the channel plumbing and offers async helpers
//! for the player command surface, state snapshots, and event streams.

use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{BattleEvent, BattleState, PartSlot};

use crate::events::{EventBus, Topic};
use crate::workers::{Command, PlayerCommand};

use super::errors::{Result, RuntimeError};

/// Client-facing handle to interact with a battle session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Advances battle time. Production runtimes drive this from the tick
    /// task; tests call it directly with synthetic deltas.
    pub async fn advance(&self, delta_ms: u32) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Advance {
            delta_ms,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn select_offensive_part(&self, slot: PartSlot) -> Result<()> {
        self.player(PlayerCommand::SelectPart(slot)).await
    }

    pub async fn select_target_combatant(&self, index: usize) -> Result<()> {
        self.player(PlayerCommand::SelectTarget(index)).await
    }

    pub async fn select_target_part(&self, slot: PartSlot) -> Result<()> {
        self.player(PlayerCommand::SelectTargetPart(slot)).await
    }

    pub async fn confirm_action(&self) -> Result<()> {
        self.player(PlayerCommand::ConfirmAction).await
    }

    pub async fn confirm_defend(&self) -> Result<()> {
        self.player(PlayerCommand::ConfirmDefend).await
    }

    pub async fn confirm_force(&self) -> Result<()> {
        self.player(PlayerCommand::ConfirmForce).await
    }

    pub async fn cancel_selection(&self) -> Result<()> {
        self.player(PlayerCommand::Cancel).await
    }

    /// Abandons the session. The scheduler stops immediately and no roster
    /// write-back happens.
    pub async fn forfeit(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Forfeit { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Queries a read-only snapshot of the battle state.
    pub async fn query_state(&self) -> Result<BattleState> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::QueryState { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribes to events from a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.event_bus.subscribe(topic)
    }

    async fn player(&self, command: PlayerCommand) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Player {
            command,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
