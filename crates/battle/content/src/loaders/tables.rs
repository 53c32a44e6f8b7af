//! Balance tables loader.

use std::path::Path;

use battle_core::CombatTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat balance tables from TOML files.
///
/// Missing sections fall back to the engine defaults, so a tuning file only
/// needs to name what it changes.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<CombatTables> {
        let content = read_file(path)?;
        let tables: PartialTables = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML {}: {}", path.display(), e))?;

        let defaults = CombatTables::default();
        Ok(CombatTables {
            hit: tables.hit.unwrap_or(defaults.hit),
            damage: tables.damage.unwrap_or(defaults.damage),
            gauge: tables.gauge.unwrap_or(defaults.gauge),
            force: tables.force.unwrap_or(defaults.force),
            lock: tables.lock.unwrap_or(defaults.lock),
        })
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct PartialTables {
    hit: Option<battle_core::HitParams>,
    damage: Option<battle_core::DamageParams>,
    gauge: Option<battle_core::GaugeParams>,
    force: Option<battle_core::ForceParams>,
    lock: Option<battle_core::LockParams>,
}
