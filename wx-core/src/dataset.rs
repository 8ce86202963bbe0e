//! The normalized, read-only weather table.

use crate::date_range::DatasetBounds;
use crate::error::LoadError;
use crate::record::{read_raw_records, RawRecord, WeatherRecord};
use std::sync::Arc;

/// An immutable weather table in source row order.
///
/// Clones share the same rows, so one load can feed every recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[WeatherRecord]>,
    bounds: Option<DatasetBounds>,
}

impl Dataset {
    /// Build a dataset from already-typed records, trimming condition labels.
    ///
    /// Normalizing an already-normalized dataset yields an equal dataset.
    pub fn normalize(records: Vec<WeatherRecord>) -> Self {
        let records: Vec<WeatherRecord> = records
            .into_iter()
            .map(|mut r| {
                let trimmed = r.condition.trim();
                if trimmed.len() != r.condition.len() {
                    r.condition = trimmed.to_string();
                }
                r
            })
            .collect();
        let bounds = records
            .iter()
            .map(|r| r.date)
            .min()
            .zip(records.iter().map(|r| r.date).max())
            .map(|(min, max)| DatasetBounds::new(min, max));
        Self {
            records: records.into(),
            bounds,
        }
    }

    /// Rename, parse and trim raw rows. Any unparseable date rejects the
    /// whole load.
    pub fn from_raw_records<I>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, raw)| WeatherRecord::from_raw(i + 2, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::normalize(records))
    }

    /// Parse a CSV export and normalize it.
    pub fn from_csv(csv_data: &str) -> Result<Self, LoadError> {
        Self::from_raw_records(read_raw_records(csv_data)?)
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest dates present, `None` for an empty dataset.
    pub fn bounds(&self) -> Option<DatasetBounds> {
        self.bounds
    }

    /// Write the dataset back out under the canonical column names.
    pub fn to_csv(&self) -> Result<String, LoadError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for record in self.records.iter() {
            wtr.serialize(record)?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| LoadError::Csv(e.into_error().into()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(date: &str, temp: f64, humidity: f64, conditions: &str) -> RawRecord {
        RawRecord {
            datetime: date.to_string(),
            temp,
            humidity,
            conditions: conditions.to_string(),
        }
    }

    #[test]
    fn test_from_raw_records_renames_parses_and_trims() {
        let dataset = Dataset::from_raw_records(vec![
            raw("2023-01-02", 4.0, 70.0, "  Clear "),
            raw("2023-01-01T06:00:00", 3.5, 72.5, "Rain"),
        ])
        .unwrap();
        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.date, ymd(2023, 1, 2));
        assert_eq!(first.temperature, 4.0);
        assert_eq!(first.humidity, 70.0);
        assert_eq!(first.condition, "Clear");
        assert_eq!(dataset.records()[1].date, ymd(2023, 1, 1));
        let bounds = dataset.bounds().unwrap();
        assert_eq!(bounds.min, ymd(2023, 1, 1));
        assert_eq!(bounds.max, ymd(2023, 1, 2));
    }

    #[test]
    fn test_one_bad_date_rejects_the_whole_load() {
        let result = Dataset::from_raw_records(vec![
            raw("2023-01-01", 4.0, 70.0, "Clear"),
            raw("2023-13-01", 4.0, 70.0, "Clear"),
        ]);
        match result {
            Err(LoadError::InvalidDate { row, value }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "2023-13-01");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        let dataset = Dataset::from_raw_records(Vec::<RawRecord>::new()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.bounds(), None);
    }

    #[test]
    fn test_to_csv_uses_canonical_headers() {
        let dataset = Dataset::from_raw_records(vec![raw("2023-01-01", 4.5, 70.0, "Clear")]).unwrap();
        let csv = dataset.to_csv().unwrap();
        assert_eq!(csv, "Date,Temperature,Humidity,Condition\n2023-01-01,4.5,70.0,Clear\n");
    }

    #[test]
    fn test_reloading_export_is_a_no_op() {
        let csv = "datetime,temp,humidity,conditions,precip\n\
                   2023-01-01,4.5,70.0,\" Rain, Overcast \",0.1\n\
                   2023-01-02,-1.25,90.5,Snow,2.0\n";
        let dataset = Dataset::from_csv(csv).unwrap();
        let reloaded = Dataset::from_csv(&dataset.to_csv().unwrap()).unwrap();
        assert_eq!(reloaded, dataset);
        assert_eq!(reloaded.records()[0].condition, "Rain, Overcast");
    }

    fn arb_record() -> impl Strategy<Value = WeatherRecord> {
        (
            0i64..365,
            -40.0f64..50.0,
            0.0f64..100.0,
            prop::sample::select(vec!["Clear", " Rain", "Overcast ", " Partially cloudy "]),
        )
            .prop_map(|(offset, temperature, humidity, condition)| WeatherRecord {
                date: ymd(2023, 1, 1) + chrono::TimeDelta::days(offset),
                temperature,
                humidity,
                condition: condition.to_string(),
            })
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(records in prop::collection::vec(arb_record(), 0..50)) {
            let once = Dataset::normalize(records);
            let twice = Dataset::normalize(once.records().to_vec());
            prop_assert_eq!(&twice, &once);
            for r in once.records() {
                prop_assert_eq!(r.condition.trim(), r.condition.as_str());
            }
        }

        #[test]
        fn csv_export_reloads_unchanged(records in prop::collection::vec(arb_record(), 1..30)) {
            let dataset = Dataset::normalize(records);
            let reloaded = Dataset::from_csv(&dataset.to_csv().unwrap()).unwrap();
            prop_assert_eq!(reloaded, dataset);
        }
    }
}
