//! Core types for the daily weather dashboard.
//!
//! - `record`: raw CSV rows and normalized [`WeatherRecord`]s
//! - `dataset`: the immutable, normalized weather table
//! - `date_range`: inclusive date windows and dataset bounds
//! - `trigger`: quick-select windows and the range resolver
//! - `context`: the [`DashboardContext`] built once at startup
//!
//! # Usage
//!
//! ```rust
//! use wx_core::{DashboardContext, QuickSelect, Trigger};
//!
//! let csv = "datetime,temp,humidity,conditions\n\
//!            2023-02-27,4.0,70,Clear\n\
//!            2023-03-01,6.5,65,Rain\n";
//! let ctx = DashboardContext::from_csv(csv).unwrap();
//! let range = ctx.resolve(Trigger::QuickSelect(QuickSelect::Last7Days), ctx.default_range());
//! assert_eq!(range.end, ctx.bounds().max);
//! assert_eq!(range.start, ctx.bounds().min);
//! ```

pub mod config;
pub mod context;
pub mod dataset;
pub mod date_range;
pub mod dates;
pub mod error;
pub mod record;
pub mod theme;
pub mod trigger;

pub use context::DashboardContext;
pub use dataset::Dataset;
pub use date_range::{DatasetBounds, DateRange};
pub use error::LoadError;
pub use record::{RawRecord, WeatherRecord};
pub use theme::Theme;
pub use trigger::{resolve, QuickSelect, Trigger};
