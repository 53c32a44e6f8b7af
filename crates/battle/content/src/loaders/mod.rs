//! Content loaders for reading battle data from files.
//!
//! RON carries catalogs (parts, squads, opponent bands); TOML carries the
//! balance tables. Loaders return `anyhow` errors with file context so a
//! bad data file names itself in the log.

pub mod squads;
pub mod tables;

pub use squads::SquadLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
