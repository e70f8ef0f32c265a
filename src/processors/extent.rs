use crate::error::{ProcessingError, Result};
use crate::models::BoundingBox;
use crate::readers::Coordinates;

/// Compute the bounding box of one file's coordinates.
///
/// Both formats reduce to the same fold once read: grid axes are taken over
/// their full range, and delimited text cells that failed to parse are
/// already `NaN`. Non-finite values never contribute. A file with no finite
/// value on either axis has no extent and fails with
/// [`ProcessingError::EmptyExtent`].
pub fn extract_extent(coordinates: &Coordinates, filename: &str) -> Result<BoundingBox> {
    let empty = || ProcessingError::EmptyExtent {
        filename: filename.to_string(),
    };

    let (south, north) = axis_range(&coordinates.latitudes).ok_or_else(empty)?;
    let (west, east) = axis_range(&coordinates.longitudes).ok_or_else(empty)?;

    BoundingBox::new(west, south, east, north)
}

/// (min, max) over the finite values of one axis
fn axis_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}
