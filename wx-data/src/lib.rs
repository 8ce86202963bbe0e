//! Derived views and state transitions for the daily weather dashboard.
//!
//! This crate turns a loaded [`wx_core::DashboardContext`] plus the current
//! `(range, theme)` state into the data behind the three charts:
//!
//! - `views`: filtering and aggregation ([`recompute`])
//! - `chart`: serializable chart requests for the D3.js renderer
//! - `state`: [`DashboardState`] transitions and whole-[`Frame`] rebuilds
//!
//! # Usage
//!
//! ```rust
//! use wx_core::{DashboardContext, QuickSelect, Theme};
//! use wx_data::{DashboardEvent, DashboardState, Frame};
//!
//! let csv = "datetime,temp,humidity,conditions\n\
//!            2023-02-28,4.0,70,Clear\n\
//!            2023-03-01,6.5,65,Rain\n";
//! let ctx = DashboardContext::from_csv(csv).unwrap();
//!
//! let state = DashboardState::initial(&ctx)
//!     .apply(&ctx, DashboardEvent::QuickSelect(QuickSelect::Last7Days))
//!     .apply(&ctx, DashboardEvent::ThemeChanged(Theme::Dark));
//! let frame = Frame::build(&ctx, state);
//!
//! assert_eq!(frame.views.temperature.len(), 2);
//! assert_eq!(frame.views.conditions.len(), 2);
//! ```

pub mod chart;
pub mod state;
pub mod views;

pub use chart::{chart_requests, ChartKind, ChartRequest, ChartSeries};
pub use state::{DashboardEvent, DashboardState, Frame};
pub use views::{recompute, ConditionCount, DerivedViews, HumidityPoint, SeriesPoint};
