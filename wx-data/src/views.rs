//! The view recomputation engine.
//!
//! [`recompute`] filters the dataset to a date range and derives the three
//! chart views from the same filtered rows in one pass, so a frame can never
//! mix views from different ranges.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use wx_core::{Dataset, DateRange, Theme, WeatherRecord};

/// A (date, value) pair for the temperature line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A humidity bar. `intensity` is the humidity scaled to `[0, 1]` and only
/// drives the bar color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumidityPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub intensity: f64,
}

/// How many filtered rows carry a condition label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionCount {
    pub condition: String,
    pub count: usize,
}

/// The three views derived for one (range, theme) state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedViews {
    pub range: DateRange,
    pub theme: Theme,
    pub temperature: Vec<SeriesPoint>,
    pub humidity: Vec<HumidityPoint>,
    pub conditions: Vec<ConditionCount>,
}

impl DerivedViews {
    /// Number of rows that fed the views.
    pub fn row_count(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty() && self.humidity.is_empty() && self.conditions.is_empty()
    }
}

/// Rows with `range.start <= date <= range.end`, ordered by date.
///
/// The sort is stable, so rows sharing a date keep their source order.
pub fn filter_rows<'a>(dataset: &'a Dataset, range: &DateRange) -> Vec<&'a WeatherRecord> {
    let mut rows: Vec<&WeatherRecord> = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.date))
        .collect();
    rows.sort_by_key(|r| r.date);
    rows
}

fn humidity_intensity(humidity: f64) -> f64 {
    if humidity.is_finite() {
        (humidity / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Count rows per condition; most frequent first, ties broken by label.
pub fn condition_distribution(rows: &[&WeatherRecord]) -> Vec<ConditionCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in rows {
        *counts.entry(r.condition.as_str()).or_default() += 1;
    }
    let mut distribution: Vec<ConditionCount> = counts
        .into_iter()
        .map(|(condition, count)| ConditionCount {
            condition: condition.to_string(),
            count,
        })
        .collect();
    // BTreeMap already yields labels in order; the stable sort keeps it for ties
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}

/// Derive all three views for `range`.
///
/// An empty or inverted range gives three empty views. `theme` is carried
/// through untouched and does not affect any value.
pub fn recompute(dataset: &Dataset, range: DateRange, theme: Theme) -> DerivedViews {
    let rows = filter_rows(dataset, &range);

    let temperature = rows
        .iter()
        .map(|r| SeriesPoint {
            date: r.date,
            value: r.temperature,
        })
        .collect();

    let humidity = rows
        .iter()
        .map(|r| HumidityPoint {
            date: r.date,
            value: r.humidity,
            intensity: humidity_intensity(r.humidity),
        })
        .collect();

    let conditions = condition_distribution(&rows);

    log::debug!(
        "[WX] recompute: {} rows in {} .. {} ({} theme)",
        rows.len(),
        range.start,
        range.end,
        theme
    );

    DerivedViews {
        range,
        theme,
        temperature,
        humidity,
        conditions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wx_core::DashboardContext;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, temperature: f64, humidity: f64, condition: &str) -> WeatherRecord {
        WeatherRecord {
            date,
            temperature,
            humidity,
            condition: condition.to_string(),
        }
    }

    fn uniform_dataset(start: NaiveDate, end: NaiveDate) -> Dataset {
        Dataset::normalize(
            DateRange::new(start, end)
                .days()
                .map(|d| record(d, 20.0, 50.0, "Clear"))
                .collect(),
        )
    }

    #[test]
    fn test_scenario_default_range_over_sixty_days() {
        let dataset = uniform_dataset(ymd(2023, 1, 1), ymd(2023, 3, 1));
        let ctx = DashboardContext::new(dataset).unwrap();
        let views = recompute(ctx.dataset(), ctx.default_range(), Theme::Light);

        assert_eq!(views.temperature.len(), 31);
        assert!(views.temperature.iter().all(|p| p.value == 20.0));
        assert_eq!(views.temperature[0].date, ymd(2023, 1, 30));
        assert_eq!(views.temperature[30].date, ymd(2023, 3, 1));
        assert_eq!(views.humidity.len(), 31);
        assert_eq!(
            views.conditions,
            vec![ConditionCount {
                condition: "Clear".to_string(),
                count: 31
            }]
        );
    }

    #[test]
    fn test_duplicate_dates_are_kept() {
        let day = ymd(2023, 1, 10);
        let dataset = Dataset::normalize(vec![
            record(day, 12.0, 40.0, "Clear"),
            record(ymd(2023, 1, 9), 8.0, 40.0, "Clear"),
            record(day, 15.5, 45.0, "Rain"),
        ]);
        let views = recompute(&dataset, DateRange::new(day, day), Theme::Light);
        let temps: Vec<f64> = views.temperature.iter().map(|p| p.value).collect();
        assert_eq!(temps, vec![12.0, 15.5]);
        assert!(views.temperature.iter().all(|p| p.date == day));
    }

    #[test]
    fn test_series_are_sorted_by_date() {
        let dataset = Dataset::normalize(vec![
            record(ymd(2023, 1, 3), 3.0, 30.0, "Clear"),
            record(ymd(2023, 1, 1), 1.0, 10.0, "Clear"),
            record(ymd(2023, 1, 2), 2.0, 20.0, "Clear"),
        ]);
        let views = recompute(
            &dataset,
            DateRange::new(ymd(2023, 1, 1), ymd(2023, 1, 3)),
            Theme::Dark,
        );
        let temps: Vec<f64> = views.temperature.iter().map(|p| p.value).collect();
        assert_eq!(temps, vec![1.0, 2.0, 3.0]);
        let humidity: Vec<f64> = views.humidity.iter().map(|p| p.value).collect();
        assert_eq!(humidity, vec![10.0, 20.0, 30.0]);
        assert_eq!(views.humidity[2].intensity, 0.3);
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let dataset = uniform_dataset(ymd(2023, 1, 1), ymd(2023, 1, 10));
        let views = recompute(
            &dataset,
            DateRange::new(ymd(2023, 1, 3), ymd(2023, 1, 5)),
            Theme::Light,
        );
        assert_eq!(views.row_count(), 3);
    }

    #[test]
    fn test_inverted_range_gives_empty_views() {
        let dataset = uniform_dataset(ymd(2023, 1, 1), ymd(2023, 1, 10));
        let views = recompute(
            &dataset,
            DateRange::new(ymd(2023, 1, 5), ymd(2023, 1, 3)),
            Theme::Light,
        );
        assert!(views.is_empty());
    }

    #[test]
    fn test_range_outside_dataset_gives_empty_views() {
        let dataset = uniform_dataset(ymd(2023, 1, 1), ymd(2023, 1, 10));
        let views = recompute(
            &dataset,
            DateRange::new(ymd(2024, 1, 1), ymd(2024, 2, 1)),
            Theme::Dark,
        );
        assert!(views.is_empty());
        assert_eq!(views.theme, Theme::Dark);
    }

    #[test]
    fn test_condition_distribution_order() {
        let day = ymd(2023, 1, 1);
        let dataset = Dataset::normalize(vec![
            record(day, 0.0, 0.0, "Snow"),
            record(day, 0.0, 0.0, "Rain"),
            record(day, 0.0, 0.0, "Clear"),
            record(day, 0.0, 0.0, "Rain"),
            record(day, 0.0, 0.0, "Clear"),
            record(day, 0.0, 0.0, " Rain "),
        ]);
        let views = recompute(&dataset, DateRange::new(day, day), Theme::Light);
        let counts: Vec<(&str, usize)> = views
            .conditions
            .iter()
            .map(|c| (c.condition.as_str(), c.count))
            .collect();
        assert_eq!(counts, vec![("Rain", 3), ("Clear", 2), ("Snow", 1)]);
    }

    #[test]
    fn test_theme_does_not_change_values() {
        let dataset = uniform_dataset(ymd(2023, 1, 1), ymd(2023, 1, 10));
        let range = DateRange::new(ymd(2023, 1, 2), ymd(2023, 1, 8));
        let light = recompute(&dataset, range, Theme::Light);
        let dark = recompute(&dataset, range, Theme::Dark);
        assert_eq!(light.temperature, dark.temperature);
        assert_eq!(light.humidity, dark.humidity);
        assert_eq!(light.conditions, dark.conditions);
        assert_ne!(light.theme, dark.theme);
    }

    #[test]
    fn test_humidity_intensity_is_clamped() {
        assert_eq!(humidity_intensity(50.0), 0.5);
        assert_eq!(humidity_intensity(130.0), 1.0);
        assert_eq!(humidity_intensity(-5.0), 0.0);
        assert_eq!(humidity_intensity(f64::NAN), 0.0);
    }

    fn arb_dataset() -> impl Strategy<Value = Dataset> {
        prop::collection::vec(
            (
                0i64..60,
                -20.0f64..40.0,
                0.0f64..100.0,
                prop::sample::select(vec!["Clear", "Rain", "Snow", "Overcast"]),
            ),
            0..80,
        )
        .prop_map(|rows| {
            Dataset::normalize(
                rows.into_iter()
                    .map(|(offset, t, h, c)| {
                        record(ymd(2023, 1, 1) + chrono::TimeDelta::days(offset), t, h, c)
                    })
                    .collect(),
            )
        })
    }

    fn arb_range() -> impl Strategy<Value = DateRange> {
        (-10i64..70, -10i64..70).prop_map(|(a, b)| {
            let base = ymd(2023, 1, 1);
            DateRange::new(base + chrono::TimeDelta::days(a), base + chrono::TimeDelta::days(b))
        })
    }

    proptest! {
        #[test]
        fn recompute_is_deterministic(dataset in arb_dataset(), range in arb_range(), dark in any::<bool>()) {
            let theme = if dark { Theme::Dark } else { Theme::Light };
            let first = recompute(&dataset, range, theme);
            let second = recompute(&dataset, range, theme);
            prop_assert_eq!(
                serde_json::to_vec(&first).unwrap(),
                serde_json::to_vec(&second).unwrap()
            );
        }

        #[test]
        fn narrowing_never_adds_rows(
            dataset in arb_dataset(),
            outer in arb_range(),
            trim_start in 0i64..30,
            trim_end in 0i64..30,
        ) {
            let inner = DateRange::new(
                outer.start + chrono::TimeDelta::days(trim_start),
                outer.end - chrono::TimeDelta::days(trim_end),
            );
            prop_assert!(inner.is_within(&outer));
            let wide = recompute(&dataset, outer, Theme::Light);
            let narrow = recompute(&dataset, inner, Theme::Light);
            prop_assert!(narrow.temperature.len() <= wide.temperature.len());
            prop_assert!(narrow.humidity.len() <= wide.humidity.len());
            let total = |v: &DerivedViews| v.conditions.iter().map(|c| c.count).sum::<usize>();
            prop_assert!(total(&narrow) <= total(&wide));
        }

        #[test]
        fn distribution_counts_match_row_count(dataset in arb_dataset(), range in arb_range()) {
            let views = recompute(&dataset, range, Theme::Light);
            let total: usize = views.conditions.iter().map(|c| c.count).sum();
            prop_assert_eq!(total, views.row_count());
            prop_assert_eq!(views.temperature.len(), views.humidity.len());
        }
    }
}
