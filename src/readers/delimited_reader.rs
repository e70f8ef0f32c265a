use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::readers::{CoordinateReader, Coordinates};
use crate::utils::constants::{
    CSV_COMMENT, CSV_DELIMITER, CSV_LATITUDE_COLUMN, CSV_LONGITUDE_COLUMN,
};

/// Reads cell-center coordinates from `;`-delimited text files.
///
/// Lines starting with `#` are comments; the first remaining line is the
/// header. Cells that do not parse as numbers become `NaN` so a malformed row
/// only drops out of the extent instead of failing the file.
pub struct DelimitedTextReader {
    latitude_column: String,
    longitude_column: String,
}

impl DelimitedTextReader {
    pub fn new() -> Self {
        Self {
            latitude_column: CSV_LATITUDE_COLUMN.to_string(),
            longitude_column: CSV_LONGITUDE_COLUMN.to_string(),
        }
    }

    pub fn with_columns(latitude_column: &str, longitude_column: &str) -> Self {
        Self {
            latitude_column: latitude_column.to_string(),
            longitude_column: longitude_column.to_string(),
        }
    }

    /// Parse coordinates out of already-decoded file content
    pub fn parse_content(&self, content: &str) -> Result<Coordinates> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .comment(Some(CSV_COMMENT))
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let lat_index = self.column_index(&headers, &self.latitude_column)?;
        let lon_index = self.column_index(&headers, &self.longitude_column)?;

        let mut coordinates = Coordinates::default();
        for record in reader.records() {
            let record = record?;
            coordinates.latitudes.push(coerce_numeric(record.get(lat_index)));
            coordinates.longitudes.push(coerce_numeric(record.get(lon_index)));
        }

        Ok(coordinates)
    }

    fn column_index(&self, headers: &csv::StringRecord, column: &str) -> Result<usize> {
        headers.iter().position(|h| h == column).ok_or_else(|| {
            ProcessingError::MissingData(format!("column '{}' not found in header", column))
        })
    }
}

impl Default for DelimitedTextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateReader for DelimitedTextReader {
    fn read_coordinates(&self, path: &Path) -> Result<Coordinates> {
        let bytes = fs::read(path)?;
        let content = decode_text(&bytes);

        let coordinates = self.parse_content(&content).map_err(|e| match e {
            ProcessingError::MissingData(msg) => {
                ProcessingError::MissingData(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;

        debug!(
            path = %path.display(),
            rows = coordinates.latitudes.len(),
            valid_latitudes = coordinates.valid_latitudes(),
            valid_longitudes = coordinates.valid_longitudes(),
            "Read delimited coordinates"
        );

        Ok(coordinates)
    }
}

/// UTF-8 (BOM stripped) when valid, otherwise Windows-1252
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return text;
    }

    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text
}

fn coerce_numeric(cell: Option<&str>) -> f64 {
    cell.and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
