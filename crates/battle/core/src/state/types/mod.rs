mod combatant;
mod common;
mod log;
mod medal;
mod part;
mod phase;
mod roster;

pub use combatant::{CombatantFlags, CombatantState};
pub use common::{CombatantId, Gauge, ResourceMeter, Side};
pub use log::{BattleLog, LogEntry};
pub use medal::{ForceTechnique, Medal, MedalAffinity};
pub use part::{Part, PartKind, PartSlot};
pub use phase::{BattleOutcome, BattlePhase, PendingSelection, PendingSource, PhaseTag};
pub use roster::RosterState;
