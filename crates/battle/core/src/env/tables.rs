//! Balance parameter tables.
//!
//! The engine never hard-codes tunables; everything balance-sensitive comes
//! through [`TablesOracle`]. Content data (TOML) provides production values,
//! the `Default` impls serve tests and headless tools.

/// Oracle exposing the balance tables to the engine.
pub trait TablesOracle: Send + Sync {
    fn combat(&self) -> &CombatTables;
}

/// Every Default-provided table in one bundle.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatTables {
    pub hit: HitParams,
    pub damage: DamageParams,
    pub gauge: GaugeParams,
    pub force: ForceParams,
    pub lock: LockParams,
}

impl TablesOracle for CombatTables {
    fn combat(&self) -> &CombatTables {
        self
    }
}

/// Hit-test parameters.
///
/// `hit_chance = clamp(base + accuracy - evasion, min, max)`; medaforce
/// attacks are additionally floored at `force_floor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitParams {
    pub base: i32,
    pub min: u32,
    pub max: u32,
    pub force_floor: u32,
    /// Chance (percent) of the independent critical draw.
    pub crit_chance: u32,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            base: 75,
            min: 10,
            max: 95,
            force_floor: 70,
            crit_chance: 15,
        }
    }
}

/// Damage scaling parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    pub crit_multiplier: u32,
    /// Incoming damage is divided by this while the target defends.
    pub defend_divisor: u32,
    /// Type-advantage multiplier as a fraction (favorable matchup).
    pub advantage_num: u32,
    pub advantage_den: u32,
    /// Unfavorable matchup fraction.
    pub disadvantage_num: u32,
    pub disadvantage_den: u32,
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            crit_multiplier: 2,
            defend_divisor: 2,
            advantage_num: 3,
            advantage_den: 2,
            disadvantage_num: 2,
            disadvantage_den: 3,
        }
    }
}

/// Charge gauge fill rate.
///
/// Per tick: `gain = max(1, speed) × rate_num × delta_ms / rate_den` gauge
/// points, where 100_000 points is a full gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaugeParams {
    pub rate_num: u32,
    pub rate_den: u32,
}

impl Default for GaugeParams {
    fn default() -> Self {
        // A 10-speed combatant fills in 4 seconds of charging.
        Self {
            rate_num: 5,
            rate_den: 2,
        }
    }
}

/// Medaforce gauge accrual and the priority bonus on force declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceParams {
    /// Gauge points gained per point of damage dealt.
    pub gain_dealt: u32,
    /// Gauge points gained per point of damage received.
    pub gain_taken: u32,
    pub priority_bonus: i32,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            gain_dealt: 300,
            gain_taken: 450,
            priority_bonus: 20,
        }
    }
}

/// Presentation lock durations (milliseconds) by dramatic weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockParams {
    pub defend_ms: u32,
    pub miss_ms: u32,
    pub hit_ms: u32,
    pub destroy_ms: u32,
    pub knockout_ms: u32,
}

impl Default for LockParams {
    fn default() -> Self {
        Self {
            defend_ms: 400,
            miss_ms: 500,
            hit_ms: 800,
            destroy_ms: 1200,
            knockout_ms: 1800,
        }
    }
}
