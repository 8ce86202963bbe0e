//! Reusable Dioxus RSX components for the weather dashboard.

mod chart_panel;
mod date_range_picker;
mod quick_select;
mod status;
mod theme_toggle;

pub use chart_panel::ChartPanel;
pub use date_range_picker::DateRangePicker;
pub use quick_select::QuickSelectButtons;
pub use status::{ErrorDisplay, LoadingSpinner};
pub use theme_toggle::ThemeToggle;
