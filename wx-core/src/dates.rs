//! Date parsing and formatting helpers.

use crate::config::{DATE_FORMATS, DATE_TIME_FORMATS, ISO_DATE_FORMAT};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format, as emitted by HTML date inputs.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT).ok()
}

/// Parse the date column of a weather export into a calendar date.
///
/// Accepts plain dates, naive date-times and RFC 3339 timestamps; any time of
/// day is discarded. Returns `None` when no known format matches.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
