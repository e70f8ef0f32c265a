use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{BoundingBox, ItemConfig};
use crate::utils::constants::ITEM_CONFIG_FILE;
use crate::writers::json::{write_json, CONFIG_INDENT};

/// What to do when an item folder already holds an `item_config.json`.
///
/// Applies to every input format alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Keep the existing file
    #[default]
    Skip,
    /// Replace it with the freshly computed box
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

pub struct ItemConfigWriter {
    policy: OverwritePolicy,
}

impl ItemConfigWriter {
    pub fn new(policy: OverwritePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverwritePolicy {
        self.policy
    }

    pub fn config_path(item_dir: &Path) -> PathBuf {
        item_dir.join(ITEM_CONFIG_FILE)
    }

    /// Write `{"bbox": [west, south, east, north]}` into `item_dir`
    pub fn write(&self, item_dir: &Path, bbox: &BoundingBox) -> Result<WriteOutcome> {
        let path = Self::config_path(item_dir);

        if path.exists() && self.policy == OverwritePolicy::Skip {
            warn!(path = %path.display(), "Item config exists, keeping it");
            return Ok(WriteOutcome::Skipped);
        }

        Self::write_config(&path, bbox)?;
        Ok(WriteOutcome::Written)
    }

    /// Rewrite a config written earlier in the same run, ignoring the policy
    pub fn replace(&self, item_dir: &Path, bbox: &BoundingBox) -> Result<()> {
        Self::write_config(&Self::config_path(item_dir), bbox)
    }

    fn write_config(path: &Path, bbox: &BoundingBox) -> Result<()> {
        write_json(path, &ItemConfig { bbox: *bbox }, CONFIG_INDENT)?;
        debug!(path = %path.display(), bbox = %bbox, "Wrote item config");
        Ok(())
    }
}

impl Default for ItemConfigWriter {
    fn default() -> Self {
        Self::new(OverwritePolicy::default())
    }
}
