//! Shop catalog loader.

use std::path::Path;

use duel_core::Catalog;

use super::{LoadResult, read_file};

/// Loader for the shop catalog from RON files.
///
/// The shipped `data/catalog.ron` mirrors [`crate::builtin_catalog`]; a
/// custom file can rename, reprice or extend the shop without touching
/// code.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let catalog: Catalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_catalog;

    #[test]
    fn shipped_catalog_file_matches_the_builtin_content() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog.ron");
        let loaded = CatalogLoader::load(&path).unwrap();
        assert_eq!(loaded, builtin_catalog());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = CatalogLoader::load(Path::new("/nonexistent/catalog.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.ron"));
    }
}
