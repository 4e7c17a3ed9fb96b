//! Content loaders for reading shop data from files.
//!
//! Loaders convert RON files into validated core types. They run once at
//! startup; a malformed or invalid data file aborts before any match
//! state exists.

mod catalog;

pub use catalog::CatalogLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
