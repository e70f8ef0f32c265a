use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Malformed filename '{filename}': {reason}")]
    MalformedFilename { filename: String, reason: String },

    #[error("No valid coordinates found in '{filename}'")]
    EmptyExtent { filename: String },

    #[error("No eligible input files found in {}", dir.display())]
    NoInputFiles { dir: PathBuf },

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("NetCDF error: {0}")]
    NetCdf(String),
}

impl ProcessingError {
    pub fn malformed_filename(filename: &str, reason: impl Into<String>) -> Self {
        ProcessingError::MalformedFilename {
            filename: filename.to_string(),
            reason: reason.into(),
        }
    }
}
