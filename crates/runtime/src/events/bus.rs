//! Topic-based event bus.
//!
//! Consumers subscribe to the topics they care about: the presentation
//! layer animates `Action` events, the control overlay follows `Phase`,
//! and the session summary screen waits on `Session`. Publishing is
//! best-effort; a topic with no subscribers simply drops the event.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use battle_core::BattleEvent;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Topic {
    /// Resolved actions, exactly one event per resolution.
    Action,
    /// Phase transitions of the battle state machine.
    Phase,
    /// Session lifecycle: battle ended.
    Session,
}

impl Topic {
    fn of(event: &BattleEvent) -> Topic {
        match event {
            BattleEvent::ActionResolved(_) => Topic::Action,
            BattleEvent::PhaseChanged { .. } => Topic::Phase,
            BattleEvent::BattleEnded { .. } => Topic::Session,
        }
    }
}

/// Broadcast bus with one channel per topic.
///
/// The topic set is fixed, so the channel map is built once and shared
/// immutably; cloning the bus clones the map handle, not the channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<BattleEvent>>>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let mut channels = HashMap::new();
        for topic in [Topic::Action, Topic::Phase, Topic::Session] {
            channels.insert(topic, broadcast::channel(capacity).0);
        }
        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publishes an event to its topic. Lagging or absent subscribers are
    /// not an error.
    pub fn publish(&self, event: BattleEvent) {
        let topic = Topic::of(&event);
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            tracing::trace!(?topic, "no subscribers for topic");
        }
    }

    /// Subscribes to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.channels
            .get(&topic)
            .map(|tx| tx.subscribe())
            // The map is total over Topic by construction.
            .unwrap_or_else(|| broadcast::channel(1).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::PhaseTag;

    #[tokio::test]
    async fn events_route_to_their_topic() {
        let bus = EventBus::new(8);
        let mut phase_rx = bus.subscribe(Topic::Phase);
        let mut action_rx = bus.subscribe(Topic::Action);

        bus.publish(BattleEvent::PhaseChanged {
            phase: PhaseTag::Charging,
        });

        let event = phase_rx.recv().await.unwrap();
        assert!(matches!(event, BattleEvent::PhaseChanged { .. }));
        assert!(action_rx.try_recv().is_err());
    }
}
