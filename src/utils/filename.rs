use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ProcessingError, Result};
use crate::models::{SourceFormat, TimeRange};
use crate::utils::constants::HOUR_STAMP_FORMAT;

/// `<start-year>_<end-year>` anywhere in a grid file name
fn year_pair_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{4})_(\d{4})").unwrap())
}

/// `<YYYYMMDDHH>-<YYYYMMDDHH>` anywhere in a delimited text file name
fn hour_pair_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{10})-(\d{10})").unwrap())
}

/// Extract the (start, end) range encoded in a file name.
///
/// Grid files encode whole years: the range runs from January 1st 00:00:00
/// of the first year to December 31st 23:59:59 of the second. Delimited text
/// files encode two hour stamps which are taken as-is.
///
/// # Examples
/// ```
/// use stac_organizer::models::SourceFormat;
/// use stac_organizer::utils::parse_time_range;
///
/// let range = parse_time_range("pr_hyras_2001_2005.nc", SourceFormat::Grid).unwrap();
/// assert_eq!(range.start().to_rfc3339(), "2001-01-01T00:00:00+00:00");
/// assert_eq!(range.end().to_rfc3339(), "2005-12-31T23:59:59+00:00");
/// ```
pub fn parse_time_range(filename: &str, format: SourceFormat) -> Result<TimeRange> {
    let (start, end) = match format {
        SourceFormat::Grid => parse_year_pair(filename)?,
        SourceFormat::DelimitedText => parse_hour_pair(filename)?,
    };

    TimeRange::new(start, end)
        .map_err(|_| ProcessingError::malformed_filename(filename, "start is after end"))
}

fn parse_year_pair(filename: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let captures = year_pair_pattern().captures(filename).ok_or_else(|| {
        ProcessingError::malformed_filename(filename, "expected '<YYYY>_<YYYY>' year range")
    })?;

    let start_year = parse_year(filename, &captures[1])?;
    let end_year = parse_year(filename, &captures[2])?;

    let start = Utc
        .with_ymd_and_hms(start_year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| ProcessingError::malformed_filename(filename, "invalid start year"))?;
    let end = Utc
        .with_ymd_and_hms(end_year, 12, 31, 23, 59, 59)
        .single()
        .ok_or_else(|| ProcessingError::malformed_filename(filename, "invalid end year"))?;

    Ok((start, end))
}

fn parse_year(filename: &str, digits: &str) -> Result<i32> {
    digits.parse::<i32>().map_err(|_| {
        ProcessingError::malformed_filename(filename, format!("invalid year '{}'", digits))
    })
}

fn parse_hour_pair(filename: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let captures = hour_pair_pattern().captures(filename).ok_or_else(|| {
        ProcessingError::malformed_filename(
            filename,
            "expected '<YYYYMMDDHH>-<YYYYMMDDHH>' hour range",
        )
    })?;

    let start = parse_hour_stamp(filename, &captures[1])?;
    let end = parse_hour_stamp(filename, &captures[2])?;

    Ok((start, end))
}

fn parse_hour_stamp(filename: &str, stamp: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(&format!("{}00", stamp), HOUR_STAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            ProcessingError::malformed_filename(
                filename,
                format!("invalid hour stamp '{}': {}", stamp, e),
            )
        })
}
