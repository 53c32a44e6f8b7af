//! Event distribution for session consumers.

mod bus;

pub use bus::{EventBus, Topic};
