use crate::config::{
    CONDITION, DATE, HUMIDITY, SOURCE_CONDITION, SOURCE_DATE, SOURCE_HUMIDITY,
    SOURCE_TEMPERATURE, TEMPERATURE,
};
use crate::dates::parse_calendar_date;
use crate::error::LoadError;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

/// One row of a weather export, under the source column names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub datetime: String,
    pub temp: f64,
    pub humidity: f64,
    pub conditions: String,
}

/// A normalized daily weather reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Degrees Celsius.
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    /// Relative humidity, percent.
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "Condition")]
    pub condition: String,
}

impl WeatherRecord {
    /// Normalize a raw row. `row` is the 1-based line number used in errors.
    pub fn from_raw(row: usize, raw: RawRecord) -> Result<Self, LoadError> {
        let date = parse_calendar_date(&raw.datetime).ok_or_else(|| LoadError::InvalidDate {
            row,
            value: raw.datetime.clone(),
        })?;
        Ok(WeatherRecord {
            date,
            temperature: raw.temp,
            humidity: raw.humidity,
            condition: raw.conditions.trim().to_string(),
        })
    }
}

/// Positions of the four required columns within a header row.
///
/// Source and canonical names are both accepted so that an exported,
/// already-normalized file loads the same way as the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    date: usize,
    temperature: usize,
    humidity: usize,
    condition: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |source: &'static str, canonical: &'static str| {
            headers
                .iter()
                .position(|h| h == source || h == canonical)
                .ok_or(LoadError::MissingColumn(source))
        };
        Ok(ColumnIndex {
            date: find(SOURCE_DATE, DATE)?,
            temperature: find(SOURCE_TEMPERATURE, TEMPERATURE)?,
            humidity: find(SOURCE_HUMIDITY, HUMIDITY)?,
            condition: find(SOURCE_CONDITION, CONDITION)?,
        })
    }
}

fn parse_number(row: usize, column: &'static str, value: &str) -> Result<f64, LoadError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidNumber {
            row,
            column,
            value: value.to_string(),
        })
}

/// Read a weather CSV export into raw rows.
///
/// Extra columns are ignored. Header names are matched after trimming.
/// Numeric columns must parse; dates are left as text for
/// [`WeatherRecord::from_raw`].
pub fn read_raw_records(csv_data: &str) -> Result<Vec<RawRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(csv_data.as_bytes());

    let columns = ColumnIndex::resolve(rdr.headers()?)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let r = result?;
        // header is line 1
        let row = i + 2;
        let field = |idx: usize| r.get(idx).unwrap_or("");
        rows.push(RawRecord {
            datetime: field(columns.date).to_string(),
            temp: parse_number(row, SOURCE_TEMPERATURE, field(columns.temperature))?,
            humidity: parse_number(row, SOURCE_HUMIDITY, field(columns.humidity))?,
            conditions: field(columns.condition).to_string(),
        });
    }
    log::debug!("[WX] reader: read {} raw rows", rows.len());
    Ok(rows)
}
