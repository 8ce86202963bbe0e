use chrono::{Days, NaiveDate, TimeDelta};
use serde::Serialize;
use std::mem::replace;

/// The inclusive span of dates present in a dataset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct DatasetBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DatasetBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamp a single date into the dataset span.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// A selected date window, inclusive on both ends.
///
/// A range whose start is after its end selects nothing; it is kept as-is
/// rather than reordered so a mistyped manual selection shows empty charts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The window of `days` days before `bounds.max`, ending at `bounds.max`.
    /// The start never falls before `bounds.min`.
    pub fn trailing(bounds: DatasetBounds, days: u64) -> Self {
        let start = bounds
            .max
            .checked_sub_days(Days::new(days))
            .map_or(bounds.min, |start| bounds.clamp(start));
        Self {
            start,
            end: bounds.max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether every date of `self` also lies in `other`.
    pub fn is_within(&self, other: &DateRange) -> bool {
        self.is_empty() || (other.start <= self.start && self.end <= other.end)
    }

    /// Clamp both endpoints into the dataset span, keeping their order.
    pub fn clamp_to(&self, bounds: DatasetBounds) -> Self {
        Self {
            start: bounds.clamp(self.start),
            end: bounds.clamp(self.end),
        }
    }

    /// Number of calendar days covered, zero for an empty range.
    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    /// Iterate each calendar day from start through end.
    pub fn days(&self) -> DayIter {
        DayIter(self.start, self.end)
    }
}

/// An iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DayIter(NaiveDate, NaiveDate);

impl Iterator for DayIter {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::days(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
