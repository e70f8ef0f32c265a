use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::TimeRange;

/// Places source files into `<data-root>/<year>/<collection-id>_<start>_<end>/`
pub struct DirectoryOrganizer {
    data_root: PathBuf,
    collection_id: String,
}

impl DirectoryOrganizer {
    pub fn new(data_root: &Path, collection_id: &str) -> Self {
        Self {
            data_root: data_root.to_path_buf(),
            collection_id: collection_id.to_string(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Destination folder for a file covering `range`, keyed by its start year
    pub fn item_dir(&self, range: &TimeRange) -> PathBuf {
        self.data_root
            .join(range.start_year().to_string())
            .join(format!("{}_{}", self.collection_id, range.folder_stamp()))
    }

    /// Copy `source` into its item folder and return the folder.
    ///
    /// Missing directories are created. Re-running with the same inputs
    /// replaces the earlier copy, so the folder always holds exactly one.
    pub fn place(&self, source: &Path, range: &TimeRange) -> Result<PathBuf> {
        let file_name = source.file_name().ok_or_else(|| {
            ProcessingError::InvalidFormat(format!(
                "Source path has no file name: {}",
                source.display()
            ))
        })?;

        let item_dir = self.item_dir(range);
        fs::create_dir_all(&item_dir)?;

        let destination = item_dir.join(file_name);
        let bytes = fs::copy(source, &destination)?;

        debug!(
            source = %source.display(),
            destination = %destination.display(),
            bytes,
            "Copied source file"
        );

        Ok(item_dir)
    }
}
