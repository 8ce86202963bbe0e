//! Dashboard-wide constants: window lengths, column names and date formats.

/// Length of the default visible window, in days before the latest date.
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Column names as they appear in the source CSV export.
pub const SOURCE_DATE: &str = "datetime";
pub const SOURCE_TEMPERATURE: &str = "temp";
pub const SOURCE_HUMIDITY: &str = "humidity";
pub const SOURCE_CONDITION: &str = "conditions";

/// Canonical column names used after normalization.
pub const DATE: &str = "Date";
pub const TEMPERATURE: &str = "Temperature";
pub const HUMIDITY: &str = "Humidity";
pub const CONDITION: &str = "Condition";

/// Date format used for HTML date inputs and D3 payloads: "YYYY-MM-DD"
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only formats accepted in the date column, tried in order.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time formats accepted in the date column. The time of day is dropped.
pub const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
