use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::constants::{
    COLLECTION_CONFIG_FILE, COLLECTION_FILE, DATA_DIR, ITEMS_DIR, METADATA_DIR,
};

/// Output paths of one collection:
///
/// ```text
/// <base>/<collection-id>/
/// ├── metadata/
/// │   ├── collection.json
/// │   ├── collection_config.json
/// │   └── items/
/// └── data/<year>/<collection-id>_<start>_<end>/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    collection_root: PathBuf,
}

impl CatalogLayout {
    pub fn new(base_dir: &Path, collection_id: &str) -> Self {
        Self {
            collection_root: base_dir.join(collection_id),
        }
    }

    pub fn collection_root(&self) -> &Path {
        &self.collection_root
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.collection_root.join(METADATA_DIR)
    }

    pub fn items_dir(&self) -> PathBuf {
        self.metadata_dir().join(ITEMS_DIR)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.collection_root.join(DATA_DIR)
    }

    pub fn collection_file(&self) -> PathBuf {
        self.metadata_dir().join(COLLECTION_FILE)
    }

    pub fn collection_config_file(&self) -> PathBuf {
        self.metadata_dir().join(COLLECTION_CONFIG_FILE)
    }

    /// Create the fixed part of the tree. Safe to call on an existing layout.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(self.items_dir())?;
        fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_paths() {
        let layout = CatalogLayout::new(Path::new("/work"), "hyras-de-pr");

        assert_eq!(layout.collection_root(), Path::new("/work/hyras-de-pr"));
        assert_eq!(
            layout.collection_file(),
            Path::new("/work/hyras-de-pr/metadata/collection.json")
        );
        assert_eq!(
            layout.collection_config_file(),
            Path::new("/work/hyras-de-pr/metadata/collection_config.json")
        );
        assert_eq!(layout.items_dir(), Path::new("/work/hyras-de-pr/metadata/items"));
        assert_eq!(layout.data_dir(), Path::new("/work/hyras-de-pr/data"));
    }

    #[test]
    fn test_ensure_dirs_is_idempotent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let layout = CatalogLayout::new(temp_dir.path(), "collection");

        layout.ensure_dirs()?;
        layout.ensure_dirs()?;

        assert!(layout.items_dir().is_dir());
        assert!(layout.data_dir().is_dir());
        Ok(())
    }
}
