//! Range resolution: turns a range trigger into a concrete [`DateRange`].
//!
//! Quick-select windows always anchor to the latest date in the dataset.
//! Manual edits pass through, clamped into the dataset span.

use crate::config::DEFAULT_WINDOW_DAYS;
use crate::date_range::{DatasetBounds, DateRange};
use serde::Serialize;

/// Predefined windows ending at the dataset's latest date.
///
/// Variants are declared in priority order: when several fire in the same
/// update cycle, the earliest declared one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QuickSelect {
    Last7Days,
    Last30Days,
    Last3Months,
}

impl QuickSelect {
    pub const ALL: [QuickSelect; 3] = [
        QuickSelect::Last7Days,
        QuickSelect::Last30Days,
        QuickSelect::Last3Months,
    ];

    pub fn days(&self) -> u64 {
        match self {
            QuickSelect::Last7Days => 7,
            QuickSelect::Last30Days => 30,
            QuickSelect::Last3Months => 90,
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            QuickSelect::Last7Days => "Last 7 Days",
            QuickSelect::Last30Days => "Last 30 Days",
            QuickSelect::Last3Months => "Last 3 Months",
        }
    }

    /// DOM id of the button.
    pub fn button_id(&self) -> &'static str {
        match self {
            QuickSelect::Last7Days => "btn-7d",
            QuickSelect::Last30Days => "btn-30d",
            QuickSelect::Last3Months => "btn-90d",
        }
    }
}

/// What caused the visible range to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Nothing pressed yet: the initial load.
    None,
    QuickSelect(QuickSelect),
    /// The user typed or picked dates directly.
    ManualEdit,
}

impl Trigger {
    fn rank(&self) -> u8 {
        match self {
            Trigger::QuickSelect(QuickSelect::Last7Days) => 0,
            Trigger::QuickSelect(QuickSelect::Last30Days) => 1,
            Trigger::QuickSelect(QuickSelect::Last3Months) => 2,
            Trigger::ManualEdit => 3,
            Trigger::None => 4,
        }
    }

    /// Reduce the triggers fired within one update cycle to the one honored.
    ///
    /// Priority: `Last7Days > Last30Days > Last3Months > ManualEdit > None`.
    /// An empty cycle resolves to [`Trigger::None`].
    pub fn coalesce<I>(triggers: I) -> Trigger
    where
        I: IntoIterator<Item = Trigger>,
    {
        triggers
            .into_iter()
            .min_by_key(Trigger::rank)
            .unwrap_or(Trigger::None)
    }
}

/// Resolve a trigger into the range to display.
///
/// `current` is the range the picker holds when the trigger fires; only a
/// manual edit looks at it.
pub fn resolve(trigger: Trigger, current: DateRange, bounds: DatasetBounds) -> DateRange {
    let resolved = match trigger {
        Trigger::None => DateRange::trailing(bounds, DEFAULT_WINDOW_DAYS),
        Trigger::QuickSelect(window) => DateRange::trailing(bounds, window.days()),
        Trigger::ManualEdit => current.clamp_to(bounds),
    };
    log::debug!(
        "[WX] resolve: {:?} -> {} .. {}",
        trigger,
        resolved.start,
        resolved.end
    );
    resolved
}
