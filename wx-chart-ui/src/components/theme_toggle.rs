//! Light/dark theme radio buttons.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::Theme;
use wx_data::DashboardEvent;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.dashboard)().map(|s| s.theme).unwrap_or_default();
    let options = Theme::ALL.map(|theme| (theme, theme.as_str(), theme.label()));

    rsx! {
        div {
            id: "theme-toggle",
            style: "position: absolute; top: 20px; right: 30px;",
            for (theme, value, caption) in options {
                label {
                    key: "{value}",
                    style: "display: inline-block; margin-right: 10px;",
                    input {
                        r#type: "radio",
                        name: "theme-toggle",
                        value: "{value}",
                        checked: theme == current,
                        onchange: move |_| state.dispatch(DashboardEvent::ThemeChanged(theme)),
                    }
                    " {caption}"
                }
            }
        }
    }
}
