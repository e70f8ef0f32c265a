use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};

/// Axis-aligned longitude/latitude rectangle.
///
/// Serializes as the STAC array form `[west, south, east, north]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Self> {
        if ![west, south, east, north].iter().all(|v| v.is_finite()) {
            return Err(ProcessingError::InvalidFormat(format!(
                "Bounding box contains non-finite values: [{}, {}, {}, {}]",
                west, south, east, north
            )));
        }

        if west > east || south > north {
            return Err(ProcessingError::InvalidFormat(format!(
                "Bounding box minimum exceeds maximum: [{}, {}, {}, {}]",
                west, south, east, north
            )));
        }

        Ok(Self {
            west,
            south,
            east,
            north,
        })
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Smallest box enclosing both `self` and `other`
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }

    /// Closed GeoJSON polygon ring, counter-clockwise starting at the south-east corner
    pub fn to_polygon_ring(&self) -> Vec<[f64; 2]> {
        vec![
            [self.east, self.south],
            [self.east, self.north],
            [self.west, self.north],
            [self.west, self.south],
            [self.east, self.south],
        ]
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = ProcessingError;

    fn try_from(value: [f64; 4]) -> Result<Self> {
        BoundingBox::new(value[0], value[1], value[2], value[3])
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_array()
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}, {:.4}, {:.4}]",
            self.west, self.south, self.east, self.north
        )
    }
}
