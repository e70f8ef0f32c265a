use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{DEFAULT_DESCRIPTION, DEFAULT_ID, DEFAULT_TITLE, ENV_PREFIX};

/// Run settings read from `catalog_config.yaml`.
///
/// Missing keys fall back to explicit placeholder strings; `STAC_*`
/// environment variables override the file.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct RunConfig {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1))]
    pub id: String,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .set_default("title", DEFAULT_TITLE)?
            .set_default("description", DEFAULT_DESCRIPTION)?
            .set_default("id", DEFAULT_ID)?
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let run_config: RunConfig = settings.try_deserialize()?;
        run_config.check()?;

        debug!(path = %path.display(), id = %run_config.id, "Loaded run configuration");
        Ok(run_config)
    }

    /// Field validation plus the rule that the id must be usable as a single
    /// directory name
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if self.id == "." || self.id == ".." || self.id.contains(['/', '\\']) {
            return Err(ProcessingError::Config(format!(
                "Collection id '{}' cannot be used as a directory name",
                self.id
            )));
        }

        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            id: DEFAULT_ID.to_string(),
        }
    }
}
