//! Async orchestration for battle sessions.
//!
//! The runtime owns a background session worker that serializes every
//! mutation of the battle state: real-time ticks, player commands, and
//! forfeits all arrive on one channel. Events stream out over a topic
//! bus, and the final outcome carries the ally squad back for the roster
//! write-back.
//!
//! ```ignore
//! let runtime = BattleRuntime::builder()
//!     .allies(roster_squad)
//!     .enemies(generator.generate(floor, seed))
//!     .tables(tables)
//!     .build()?;
//!
//! let handle = runtime.handle();
//! let mut actions = handle.subscribe(Topic::Action);
//! // ... drive selection commands from the UI ...
//! let outcome = runtime.join().await?;
//! ```

pub mod api;
pub mod events;
pub mod runtime;
pub mod workers;

pub use api::{Result, RuntimeError, SessionHandle};
pub use events::{EventBus, Topic};
pub use runtime::{BattleRuntime, RuntimeBuilder, RuntimeConfig};
pub use workers::{PlayerCommand, SessionOutcome};
