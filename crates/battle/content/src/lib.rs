//! Data-driven battle content and loaders.
//!
//! This crate houses the serializable templates for parts, medals, and
//! combatants, the loaders that read them from RON/TOML files, and the
//! floor-indexed opponent generator. Content is consumed by the runtime
//! when a session is assembled and never appears inside battle state.

pub mod catalog;
pub mod generator;
pub mod specs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{default_opponent_bands, starter_combatant};
pub use generator::{FloorBand, OpponentGenerator};
pub use specs::{CombatantSpec, MedalSpec, PartSpec, TechniqueSpec};

#[cfg(feature = "loaders")]
pub use loaders::{SquadLoader, TablesLoader};
