//! A titled container that one D3.js chart renders into.

use dioxus::prelude::*;
use wx_data::ChartKind;

/// Props for ChartPanel
#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// Which chart this panel hosts; decides the DOM id D3 draws into
    pub kind: ChartKind,
    /// Whether data is still loading
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 420)]
    pub min_height: u32,
}

#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin-bottom: 16px;",
        props.min_height
    );
    let id = props.kind.container_id();

    rsx! {
        section {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); opacity: 0.6;",
                    "Loading chart..."
                }
            }
            div {
                id: "{id}",
                style: "width: 100%;",
            }
        }
    }
}
