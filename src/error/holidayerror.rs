use std::num::ParseIntError;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// A holiday window whose start lies after its end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("holiday window starts at {start} after it ends at {end}")]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate
}

/// Failure to read one `"<day> <month>"` date from the listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateError {
    #[error("date '{0}' has no month name")]
    MissingMonth(String),
    #[error("unknown month name '{0}'")]
    UnknownMonth(String),
    #[error("invalid day number '{text}'")]
    InvalidDay {
        text: String,
        #[source]
        source: ParseIntError
    },
    #[error("day {day} does not exist in month {month} of {year}")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32
    }
}

/// Row-level extraction failure. The row is skipped, the pass goes on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("malformed row: {0}")]
    Malformed(String),
    #[error(transparent)]
    Parse(#[from] ParseDateError),
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError)
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error
    },
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: u16
    },
    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error
    }
}

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid row selector '{selector}': {message}")]
    Selector {
        selector: &'static str,
        message: String
    },
    #[error("failed to read holiday cache {}: {source}", .path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("holiday cache {} is corrupt: {source}", .path.display())]
    CacheCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },
    #[error("failed to write holiday cache {}: {source}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("failed to encode holiday cache {}: {source}", .path.display())]
    CacheEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),
    #[error("failed to read configuration {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("invalid configuration {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    }
}
