//! The immutable dashboard context, built once at startup.

use crate::config::DEFAULT_WINDOW_DAYS;
use crate::dataset::Dataset;
use crate::date_range::{DatasetBounds, DateRange};
use crate::error::LoadError;
use crate::record::RawRecord;
use crate::trigger::{resolve, Trigger};

/// Everything derived from the dataset at load time.
///
/// Passed explicitly to range resolution and view recomputation; nothing in
/// it changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardContext {
    dataset: Dataset,
    bounds: DatasetBounds,
    default_range: DateRange,
}

impl DashboardContext {
    /// Wrap a loaded dataset. Fails on an empty dataset, which has no
    /// latest date to anchor the default window on.
    pub fn new(dataset: Dataset) -> Result<Self, LoadError> {
        let bounds = dataset.bounds().ok_or(LoadError::EmptyDataset)?;
        let default_range = DateRange::trailing(bounds, DEFAULT_WINDOW_DAYS);
        log::info!(
            "[WX] loader: loaded {} weather records from {} to {}, default range {} .. {}",
            dataset.len(),
            bounds.min,
            bounds.max,
            default_range.start,
            default_range.end
        );
        Ok(Self {
            dataset,
            bounds,
            default_range,
        })
    }

    pub fn from_raw_records<I>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        Self::new(Dataset::from_raw_records(rows)?)
    }

    pub fn from_csv(csv_data: &str) -> Result<Self, LoadError> {
        Self::new(Dataset::from_csv(csv_data)?)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn bounds(&self) -> DatasetBounds {
        self.bounds
    }

    /// The last 30 days ending at the latest date.
    pub fn default_range(&self) -> DateRange {
        self.default_range
    }

    /// Resolve a trigger against this dataset's span.
    pub fn resolve(&self, trigger: Trigger, current: DateRange) -> DateRange {
        resolve(trigger, current, self.bounds)
    }
}
