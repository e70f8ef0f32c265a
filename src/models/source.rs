use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    CSV_ASSET_TITLE, CSV_EXTENSION, CSV_MEDIA_TYPE, NETCDF_ASSET_TITLE, NETCDF_EXTENSION,
    NETCDF_MEDIA_TYPE,
};

/// The two input kinds the organizer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Gridded binary-array file (NetCDF)
    Grid,
    /// `;`-delimited text file with cell-center coordinate columns
    DelimitedText,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            NETCDF_EXTENSION => Some(SourceFormat::Grid),
            CSV_EXTENSION => Some(SourceFormat::DelimitedText),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Grid => NETCDF_EXTENSION,
            SourceFormat::DelimitedText => CSV_EXTENSION,
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            SourceFormat::Grid => NETCDF_MEDIA_TYPE,
            SourceFormat::DelimitedText => CSV_MEDIA_TYPE,
        }
    }

    pub fn asset_title(&self) -> &'static str {
        match self {
            SourceFormat::Grid => NETCDF_ASSET_TITLE,
            SourceFormat::DelimitedText => CSV_ASSET_TITLE,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceFormat::Grid => "NetCDF",
            SourceFormat::DelimitedText => "CSV",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An input file together with the format its extension selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    format: SourceFormat,
}

impl SourceFile {
    /// Returns `None` when the extension is not one of the supported formats
    pub fn from_path(path: &Path) -> Option<Self> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(SourceFormat::from_extension)?;

        Some(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn file_name(&self) -> Result<&str> {
        self.path
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| {
                ProcessingError::InvalidFormat(format!(
                    "Invalid file path: {}",
                    self.path.display()
                ))
            })
    }

    /// File name without its format extension, used as the STAC item id
    pub fn stem(&self) -> Result<&str> {
        let file_name = self.file_name()?;
        Ok(file_name
            .strip_suffix(self.format.extension())
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(file_name))
    }
}
