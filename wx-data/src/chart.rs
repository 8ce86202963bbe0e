//! Chart requests handed to the rendering adapter.
//!
//! A request describes what to draw, never how: the series, a title, axis
//! labels and the theme palette. All requests derive `Serialize` so they can
//! be passed to D3.js as JSON.

use crate::views::{ConditionCount, DerivedViews, HumidityPoint, SeriesPoint};
use serde::Serialize;
use wx_core::theme::Palette;
use wx_core::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    /// DOM id of the container the chart renders into.
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartKind::Line => "temp-line-chart",
            ChartKind::Bar => "humidity-bar-chart",
            ChartKind::Pie => "condition-pie-chart",
        }
    }
}

/// The data behind one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartSeries {
    Temperature(Vec<SeriesPoint>),
    Humidity(Vec<HumidityPoint>),
    Conditions(Vec<ConditionCount>),
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Temperature(points) => points.len(),
            ChartSeries::Humidity(points) => points.len(),
            ChartSeries::Conditions(counts) => counts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rendering options passed alongside the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: &'static str,
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,
    /// Draw point markers on line charts.
    pub markers: bool,
    /// Color bars by their `intensity`.
    pub color_by_value: bool,
    pub theme: Theme,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub series: ChartSeries,
    pub config: ChartConfig,
}

impl ChartRequest {
    pub fn container_id(&self) -> &'static str {
        self.kind.container_id()
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.series)
    }

    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.config)
    }

    fn config(
        title: &'static str,
        x_axis_label: &'static str,
        y_axis_label: &'static str,
        theme: Theme,
    ) -> ChartConfig {
        ChartConfig {
            title,
            x_axis_label,
            y_axis_label,
            markers: false,
            color_by_value: false,
            theme,
            palette: theme.palette(),
        }
    }

    /// Temperature over time, as a line with point markers.
    pub fn temperature(views: &DerivedViews) -> Self {
        Self {
            kind: ChartKind::Line,
            series: ChartSeries::Temperature(views.temperature.clone()),
            config: ChartConfig {
                markers: true,
                ..Self::config("Temperature Over Time", "Date", "Temp (°C)", views.theme)
            },
        }
    }

    /// Humidity per day, as bars colored by humidity.
    pub fn humidity(views: &DerivedViews) -> Self {
        Self {
            kind: ChartKind::Bar,
            series: ChartSeries::Humidity(views.humidity.clone()),
            config: ChartConfig {
                color_by_value: true,
                ..Self::config("Humidity Levels", "Date", "Humidity (%)", views.theme)
            },
        }
    }

    /// Share of each weather condition, as a pie.
    pub fn conditions(views: &DerivedViews) -> Self {
        Self {
            kind: ChartKind::Pie,
            series: ChartSeries::Conditions(views.conditions.clone()),
            config: Self::config("Weather Condition Distribution", "Condition", "Count", views.theme),
        }
    }
}

/// The three requests for one set of derived views, in display order.
pub fn chart_requests(views: &DerivedViews) -> [ChartRequest; 3] {
    [
        ChartRequest::temperature(views),
        ChartRequest::humidity(views),
        ChartRequest::conditions(views),
    ]
}
