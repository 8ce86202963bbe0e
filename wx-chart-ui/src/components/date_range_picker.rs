//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::dates::{format_date, parse_iso_date};

/// Date range picker bound to the dashboard range.
///
/// Inputs are limited to the dataset span. An unparseable or cleared input
/// leaves the range unchanged.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let Some(current) = (state.dashboard)() else {
        return rsx! {};
    };
    let (min, max) = (state.context)()
        .map(|ctx| (format_date(&ctx.bounds().min), format_date(&ctx.bounds().max)))
        .unwrap_or_default();
    let start = format_date(&current.range.start);
    let end = format_date(&current.range.end);

    let on_start_change = move |evt: Event<FormData>| match parse_iso_date(&evt.value()) {
        Some(start) => state.edit_dates(Some(start), None),
        None => log::warn!("[WX] ignoring start date {:?}", evt.value()),
    };

    let on_end_change = move |evt: Event<FormData>| match parse_iso_date(&evt.value()) {
        Some(end) => state.edit_dates(None, Some(end)),
        None => log::warn!("[WX] ignoring end date {:?}", evt.value()),
    };

    rsx! {
        div {
            style: "display: inline-flex; gap: 12px; align-items: center; border: 1px solid #ccc; padding: 10px; border-radius: 8px;",
            label {
                "From: "
                input {
                    id: "date-range-start",
                    r#type: "date",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_start_change,
                }
            }
            label {
                "To: "
                input {
                    id: "date-range-end",
                    r#type: "date",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
