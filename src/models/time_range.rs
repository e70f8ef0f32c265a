use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::FOLDER_TIMESTAMP_FORMAT;

/// Closed time interval with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(ProcessingError::InvalidFormat(format!(
                "Time range start {} is after end {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    pub fn union(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// `<start>_<end>` in compact `YYYYMMDDThhmmss` form, as used in item folder names
    pub fn folder_stamp(&self) -> String {
        format!(
            "{}_{}",
            self.start.format(FOLDER_TIMESTAMP_FORMAT),
            self.end.format(FOLDER_TIMESTAMP_FORMAT)
        )
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
