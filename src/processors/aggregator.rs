use std::path::{Path, PathBuf};

use crate::error::{ProcessingError, Result};
use crate::models::{BoundingBox, CollectionExtent, TimeRange};

/// Fold per-file extents into one collection extent.
///
/// West/south are the minimum and east/north the maximum over all boxes; the
/// time range runs from the earliest start to the latest end. An empty input
/// has no defined extent and fails with [`ProcessingError::NoInputFiles`],
/// attributed to `source_dir`.
pub fn aggregate(
    boxes: &[BoundingBox],
    ranges: &[TimeRange],
    source_dir: &Path,
) -> Result<CollectionExtent> {
    let no_input = || ProcessingError::NoInputFiles {
        dir: source_dir.to_path_buf(),
    };

    let (first_box, rest_boxes) = boxes.split_first().ok_or_else(no_input)?;
    let (first_range, rest_ranges) = ranges.split_first().ok_or_else(no_input)?;

    let spatial = rest_boxes
        .iter()
        .fold(*first_box, |acc, bbox| acc.union(bbox));
    let temporal = rest_ranges
        .iter()
        .fold(*first_range, |acc, range| acc.union(range));

    Ok(CollectionExtent { spatial, temporal })
}

/// Per-run accumulator of every processed file's extent, owned by the driver
#[derive(Debug, Clone)]
pub struct ExtentAccumulator {
    source_dir: PathBuf,
    boxes: Vec<BoundingBox>,
    ranges: Vec<TimeRange>,
}

impl ExtentAccumulator {
    pub fn new(source_dir: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            boxes: Vec::new(),
            ranges: Vec::new(),
        }
    }

    pub fn with_capacity(source_dir: &Path, capacity: usize) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            boxes: Vec::with_capacity(capacity),
            ranges: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bbox: BoundingBox, range: TimeRange) {
        self.boxes.push(bbox);
        self.ranges.push(range);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn finish(&self) -> Result<CollectionExtent> {
        aggregate(&self.boxes, &self.ranges, &self.source_dir)
    }
}
