use std::path::PathBuf;
use tracing::info;

use crate::error::Result;
use crate::models::{CollectionConfig, CollectionExtent, CollectionRecord};
use crate::settings::RunConfig;
use crate::utils::constants::COLLECTION_FILE;
use crate::utils::layout::CatalogLayout;
use crate::writers::json::{write_json, CONFIG_INDENT, STAC_INDENT};

/// Writes the collection-level artifacts into `metadata/`
pub struct CatalogEmitter {
    layout: CatalogLayout,
}

impl CatalogEmitter {
    pub fn new(layout: CatalogLayout) -> Self {
        Self { layout }
    }

    /// Persist `collection.json` with the aggregated extent and fixed metadata
    pub fn emit_collection(
        &self,
        extent: &CollectionExtent,
        run_config: &RunConfig,
    ) -> Result<PathBuf> {
        let path = self.layout.collection_file();
        let self_href = self
            .layout
            .metadata_dir()
            .canonicalize()
            .map(|dir| dir.join(COLLECTION_FILE))
            .unwrap_or_else(|_| path.clone())
            .to_string_lossy()
            .into_owned();

        let record = CollectionRecord::new(
            &run_config.id,
            &run_config.title,
            &run_config.description,
            extent,
        )
        .with_self_link(&self_href);

        write_json(&path, &record, STAC_INDENT)?;
        info!(
            path = %path.display(),
            bbox = %extent.spatial,
            interval = %extent.temporal,
            "Collection saved"
        );

        Ok(path)
    }

    /// Persist the fixed-shape `collection_config.json`
    pub fn emit_collection_config(&self, collection_id: &str) -> Result<PathBuf> {
        let path = self.layout.collection_config_file();
        write_json(&path, &CollectionConfig::new(collection_id), CONFIG_INDENT)?;
        info!(path = %path.display(), "Collection config saved");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoundingBox, TimeRange};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn run_config() -> RunConfig {
        RunConfig {
            title: "HYRAS precipitation".to_string(),
            description: "Daily gridded precipitation for Germany".to_string(),
            id: "hyras-de-pr".to_string(),
        }
    }

    #[test]
    fn test_emit_collection_and_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let layout = CatalogLayout::new(temp_dir.path(), "hyras-de-pr");
        layout.ensure_dirs()?;

        let extent = CollectionExtent {
            spatial: BoundingBox::new(5.8, 47.2, 15.1, 55.1)?,
            temporal: TimeRange::new(
                Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2004, 12, 31, 23, 59, 59).unwrap(),
            )?,
        };

        let emitter = CatalogEmitter::new(layout.clone());
        let collection_path = emitter.emit_collection(&extent, &run_config())?;
        let config_path = emitter.emit_collection_config("hyras-de-pr")?;

        let collection: Value = serde_json::from_str(&fs::read_to_string(&collection_path)?)?;
        assert_eq!(collection["id"], "hyras-de-pr");
        assert_eq!(collection["title"], "HYRAS precipitation");
        assert_eq!(collection["description"], "Daily gridded precipitation for Germany");
        assert_eq!(collection["extent"]["spatial"]["bbox"][0][3], 55.1);
        assert!(collection["links"][0]["href"]
            .as_str()
            .unwrap()
            .ends_with("collection.json"));

        let config: CollectionConfig = serde_json::from_str(&fs::read_to_string(&config_path)?)?;
        assert_eq!(config, CollectionConfig::new("hyras-de-pr"));
        assert_eq!(config_path, layout.collection_config_file());
        Ok(())
    }
}
