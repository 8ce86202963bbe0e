//! Quick-select buttons for predefined windows.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::QuickSelect;
use wx_data::DashboardEvent;

/// "Last 7 Days" / "Last 30 Days" / "Last 3 Months" buttons.
/// Each press anchors the range to the latest date in the dataset.
#[component]
pub fn QuickSelectButtons() -> Element {
    let mut state = use_context::<AppState>();
    let buttons = QuickSelect::ALL.map(|window| (window, window.button_id(), window.label()));

    rsx! {
        div {
            style: "margin-top: 10px;",
            for (window, id, label) in buttons {
                button {
                    key: "{id}",
                    id: "{id}",
                    style: "margin: 5px;",
                    onclick: move |_| state.dispatch(DashboardEvent::QuickSelect(window)),
                    "{label}"
                }
            }
        }
    }
}
