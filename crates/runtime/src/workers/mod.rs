//! Background workers owned by the runtime.

mod session;

pub use session::{Command, PlayerCommand, SessionOutcome, SessionWorker};
