//! Read-only collaborators the engine depends on.
//!
//! Oracles expose balance tables and deterministic randomness without
//! coupling the engine to concrete implementations. The runtime bundles
//! content-loaded tables; tests bundle defaults.

mod rng;
mod tables;

pub use rng::{PcgRng, RngOracle, compute_seed, draw};
pub use tables::{
    CombatTables, DamageParams, ForceParams, GaugeParams, HitParams, LockParams, TablesOracle,
};

/// Aggregates the oracles required by the engine, resolver, and AI.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    tables: &'a dyn TablesOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(tables: &'a dyn TablesOracle, rng: &'a dyn RngOracle) -> Self {
        Self { tables, rng }
    }

    #[inline]
    pub fn tables(&self) -> &CombatTables {
        self.tables.combat()
    }

    #[inline]
    pub fn rng(&self) -> &dyn RngOracle {
        self.rng
    }
}
