//! Daily Weather Dashboard
//!
//! Shows temperature, humidity and weather conditions for a selectable date
//! range as three D3.js charts: a line, a bar chart and a pie.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/weather_data.csv` (or `$WEATHER_CSV`) into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: normalize the CSV into a `DashboardContext` once.
//! 4. On any range or theme change: rebuild the whole frame and re-render
//!    all three charts together.

use anyhow::Context;
use dioxus::prelude::*;
use wx_chart_ui::components::{
    ChartPanel, DateRangePicker, ErrorDisplay, LoadingSpinner, QuickSelectButtons, ThemeToggle,
};
use wx_chart_ui::js_bridge;
use wx_chart_ui::state::AppState;
use wx_core::DashboardContext;
use wx_data::{ChartKind, Frame};

const WEATHER_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/weather_data.csv"));

const TITLE: &str = "Daily Weather Dashboard";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-dashboard-root"))
        .launch(App);
}

/// Build the context from the embedded CSV. Any error here is fatal for
/// the session: no chart is drawn from a partial dataset.
fn load_context(csv_data: &str) -> anyhow::Result<DashboardContext> {
    DashboardContext::from_csv(csv_data).context("weather_data.csv was rejected")
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || {
        match load_context(WEATHER_CSV) {
            Ok(ctx) => {
                state.install(ctx);
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("{:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Rebuild every view whenever range or theme changes ───
    use_effect(move || {
        let Some(dashboard) = (state.dashboard)() else {
            return;
        };
        let Some(ctx) = (state.context)() else {
            return;
        };
        let frame = Frame::build(&ctx, dashboard);
        log::info!(
            "[WX] rendering {} rows for {} .. {} ({} theme)",
            frame.views.row_count(),
            frame.state.range.start,
            frame.state.range.end,
            frame.state.theme
        );
        js_bridge::render_frame(&frame);
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();
    let panels = [ChartKind::Line, ChartKind::Bar, ChartKind::Pie].map(|kind| (kind, kind.container_id()));

    rsx! {
        document::Title { "{TITLE}" }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "position: relative;",
                h1 {
                    style: "text-align: center; margin-bottom: 10px;",
                    "{TITLE}"
                }
                ThemeToggle {}
            }

            if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if loading {
                LoadingSpinner {}
            } else {
                div {
                    style: "text-align: center; margin-bottom: 20px;",
                    label {
                        style: "font-weight: bold; display: block; margin-bottom: 6px;",
                        "Select Date Range:"
                    }
                    DateRangePicker {}
                    QuickSelectButtons {}
                }

                for (kind, id) in panels {
                    ChartPanel { key: "{id}", kind: kind, loading: loading }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let ctx = load_context(WEATHER_CSV).unwrap();
        assert!(ctx.dataset().len() >= 90);
        assert_eq!(ctx.default_range().end, ctx.bounds().max);
    }

    #[test]
    fn test_rejected_dataset_reports_cause() {
        let err = load_context("datetime,temp\n2023-01-01,4\n").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("weather_data.csv was rejected"));
        assert!(message.contains("missing required column `humidity`"));
    }
}
