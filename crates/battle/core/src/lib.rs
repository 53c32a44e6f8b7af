//! Deterministic squad-battle logic shared across the runtime and tools.
//!
//! `battle-core` defines the canonical rules: the combatant model, the
//! charge-gauge scheduler, action resolution, machine-side action synthesis,
//! and the battle state machine. All state mutation flows through
//! [`engine::BattleEngine`]; outer layers drive it with tick deltas and
//! player commands, and read back events, state snapshots, and digests.

pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;
pub mod stats;

pub use action::{ActionSource, DeclaredAction};
pub use combat::{Advantage, ResolvedAction, ResolvedKind};
pub use config::BattleConfig;
pub use engine::{BattleEngine, BattleEvent, BattleRewards};
pub use env::{
    BattleEnv, CombatTables, DamageParams, ForceParams, GaugeParams, HitParams, LockParams,
    PcgRng, RngOracle, TablesOracle, compute_seed,
};
pub use state::{
    BattleLog, BattleOutcome, BattlePhase, BattleState, CombatantFlags, CombatantId,
    CombatantState, ForceTechnique, Gauge, InitializationError, LogEntry, Medal, MedalAffinity,
    Part, PartKind, PartSlot, PendingSelection, PendingSource, PhaseTag, ResourceMeter,
    RosterState, Side, StateDigest,
};
pub use stats::StatsSnapshot;
