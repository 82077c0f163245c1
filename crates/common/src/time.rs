//! Lenient timestamp parsing for request bodies and query filters.
//!
//! Clients send either full RFC 3339 timestamps or the shorter forms a
//! date picker produces. Anything without an offset is taken as UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid timestamp {input:?}: expected RFC 3339, YYYY-MM-DD[ HH:MM[:SS]] or YYYY-MM-DDTHH:MM[:SS]")]
pub struct TimeParseError {
    pub input: String,
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimeParseError> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&naive).into());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive).into());
        }
    }
    Err(TimeParseError { input: raw.to_string() })
}
