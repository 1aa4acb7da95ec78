//! UTC time helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Get the current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format a UTC time as ISO 8601 (RFC 3339) with microsecond precision
pub fn to_iso8601(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Unix timestamp in seconds
pub fn unix_seconds(time: &DateTime<Utc>) -> i64 {
    time.timestamp()
}
