//! Squad catalog loader.

use std::path::Path;

use battle_core::CombatantState;

use crate::loaders::{LoadResult, read_file};
use crate::specs::CombatantSpec;

/// Loader for squad rosters from RON files.
///
/// RON format: `Vec<CombatantSpec>`.
pub struct SquadLoader;

impl SquadLoader {
    /// Load combatant specs from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<CombatantSpec>> {
        let content = read_file(path)?;
        let specs: Vec<CombatantSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse squad RON {}: {}", path.display(), e))?;
        Ok(specs)
    }

    /// Load and materialize a squad in one step.
    pub fn load_materialized(path: &Path) -> LoadResult<Vec<CombatantState>> {
        Ok(Self::load(path)?.iter().map(|spec| spec.materialize()).collect())
    }
}
