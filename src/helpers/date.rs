//! Date helper functions

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant as an ISO-8601 string with millisecond precision
///
/// # Examples
/// ```ignore
/// iso_instant(&date) // -> "2024-01-15T10:30:00.000Z"
/// ```
pub fn iso_instant(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format an instant as a calendar date ("Mon Jan 15 2024")
pub fn calendar_date(date: &DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}
