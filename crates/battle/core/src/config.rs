/// Battle engine constants shared across state types and the engine.
///
/// Balance-sensitive numbers (charge rates, hit bounds, lock durations) are
/// not here: those flow through [`crate::env::TablesOracle`] so content data
/// can tune them without touching the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleConfig;

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum combatants per squad.
    pub const MAX_SQUAD: usize = 3;
    /// Maximum medaforce techniques a medal can carry.
    pub const MAX_TECHNIQUES: usize = 4;

    // ===== charge gauge fixed-point encoding =====
    /// Gauge points per displayed percent.
    pub const GAUGE_SCALE: u32 = 1_000;
    /// A full gauge (100%).
    pub const GAUGE_FULL: u32 = 100 * Self::GAUGE_SCALE;
}
