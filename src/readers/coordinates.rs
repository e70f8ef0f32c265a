use std::path::Path;

use crate::error::Result;

/// Raw latitude/longitude values read from one file.
///
/// `NaN` marks a missing or unparseable value. The two vectors need not be
/// the same length: grid files carry independent 1-D axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
}

impl Coordinates {
    pub fn new(latitudes: Vec<f64>, longitudes: Vec<f64>) -> Self {
        Self {
            latitudes,
            longitudes,
        }
    }

    pub fn valid_latitudes(&self) -> usize {
        self.latitudes.iter().filter(|v| v.is_finite()).count()
    }

    pub fn valid_longitudes(&self) -> usize {
        self.longitudes.iter().filter(|v| v.is_finite()).count()
    }
}

/// Source of coordinate arrays for one file format
pub trait CoordinateReader {
    fn read_coordinates(&self, path: &Path) -> Result<Coordinates>;
}
