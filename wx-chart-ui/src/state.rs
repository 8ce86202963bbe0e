//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`
//! and report user actions through [`AppState::dispatch`].

use chrono::NaiveDate;
use dioxus::prelude::*;
use wx_core::DashboardContext;
use wx_data::{DashboardEvent, DashboardState};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset and its bounds (None until loaded)
    pub context: Signal<Option<DashboardContext>>,
    /// Current (range, theme); replaced wholesale on every event
    pub dashboard: Signal<Option<DashboardState>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            context: Signal::new(None),
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Install a freshly loaded context and its startup state.
    pub fn install(&mut self, ctx: DashboardContext) {
        let initial = DashboardState::initial(&ctx).apply(&ctx, DashboardEvent::Startup);
        self.context.set(Some(ctx));
        self.dashboard.set(Some(initial));
    }

    /// Apply a user event. Ignored until the dataset has loaded.
    pub fn dispatch(&mut self, event: DashboardEvent) {
        let Some(ctx) = (self.context)() else {
            log::warn!("[WX] ignoring {:?}: dataset not loaded", event);
            return;
        };
        let current = (self.dashboard)().unwrap_or_else(|| DashboardState::initial(&ctx));
        self.dashboard.set(Some(current.apply(&ctx, event)));
    }

    /// Apply a picker edit; a missing side keeps its current value.
    pub fn edit_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        let Some(current) = (self.dashboard)() else {
            return;
        };
        self.dispatch(DashboardEvent::DatesEdited {
            start: start.unwrap_or(current.range.start),
            end: end.unwrap_or(current.range.end),
        });
    }
}
