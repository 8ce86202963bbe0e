//! Dashboard state transitions.
//!
//! The whole UI reduces to a `(range, theme)` pair. Every event produces a
//! new [`DashboardState`]; a [`Frame`] is then built from it in one call, so
//! observers only ever see a state together with all of its views.

use crate::chart::{chart_requests, ChartRequest};
use crate::views::{recompute, DerivedViews};
use chrono::NaiveDate;
use serde::Serialize;
use wx_core::{DashboardContext, DateRange, QuickSelect, Theme, Trigger};

/// Something the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Initial page load; no button pressed yet.
    Startup,
    QuickSelect(QuickSelect),
    /// New picker values. Pass the unchanged end when only the start was
    /// edited, and vice versa.
    DatesEdited { start: NaiveDate, end: NaiveDate },
    ThemeChanged(Theme),
}

impl DashboardEvent {
    fn trigger(&self) -> Option<Trigger> {
        match self {
            DashboardEvent::Startup => Some(Trigger::None),
            DashboardEvent::QuickSelect(window) => Some(Trigger::QuickSelect(*window)),
            DashboardEvent::DatesEdited { .. } => Some(Trigger::ManualEdit),
            DashboardEvent::ThemeChanged(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub range: DateRange,
    pub theme: Theme,
}

impl DashboardState {
    /// The state shown on first load: default range, light theme.
    pub fn initial(ctx: &DashboardContext) -> Self {
        Self {
            range: ctx.default_range(),
            theme: Theme::default(),
        }
    }

    /// Apply a single event.
    pub fn apply(&self, ctx: &DashboardContext, event: DashboardEvent) -> Self {
        self.apply_cycle(ctx, &[event])
    }

    /// Apply every event fired within one update cycle.
    ///
    /// Range triggers are reduced to one by [`Trigger::coalesce`]; among
    /// theme changes the last one wins. If no event touches the range it is
    /// kept as-is.
    pub fn apply_cycle(&self, ctx: &DashboardContext, events: &[DashboardEvent]) -> Self {
        let trigger = Trigger::coalesce(events.iter().filter_map(DashboardEvent::trigger));
        let touches_range = events.iter().any(|e| e.trigger().is_some());

        // last manual edit of the cycle is the one the picker shows
        let edited = events.iter().rev().find_map(|e| match e {
            DashboardEvent::DatesEdited { start, end } => Some(DateRange::new(*start, *end)),
            _ => None,
        });

        let range = if touches_range {
            ctx.resolve(trigger, edited.unwrap_or(self.range))
        } else {
            self.range
        };

        let theme = events
            .iter()
            .rev()
            .find_map(|e| match e {
                DashboardEvent::ThemeChanged(theme) => Some(*theme),
                _ => None,
            })
            .unwrap_or(self.theme);

        let next = Self { range, theme };
        if next != *self {
            log::debug!(
                "[WX] state: {} .. {} ({}) -> {} .. {} ({})",
                self.range.start,
                self.range.end,
                self.theme,
                next.range.start,
                next.range.end,
                next.theme
            );
        }
        next
    }
}

/// A state with every view and chart request derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub state: DashboardState,
    pub views: DerivedViews,
    pub requests: [ChartRequest; 3],
}

impl Frame {
    /// Recompute all views for `state`. Runs on every state change,
    /// including theme-only changes.
    pub fn build(ctx: &DashboardContext, state: DashboardState) -> Self {
        let views = recompute(ctx.dataset(), state.range, state.theme);
        let requests = chart_requests(&views);
        Self {
            state,
            views,
            requests,
        }
    }
}
