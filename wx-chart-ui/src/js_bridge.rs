//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes [`ChartRequest`]s and calls those globals.

use wasm_bindgen::JsValue;
use wx_core::Theme;
use wx_data::{ChartKind, ChartRequest, Frame};

static COMMON_JS: &str = include_str!("../assets/js/common.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Global functions defined by the chart scripts.
const CHART_FUNCTIONS: &[&str] = &[
    "renderLineChart",
    "renderBarChart",
    "renderPieChart",
    "wxShowTooltip",
    "wxHideTooltip",
];

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Evaluate JS, logging instead of panicking when it throws.
pub fn call_js(code: &str) {
    if let Err(err) = js_sys::eval(code) {
        log::warn!("[WX] JS call failed: {}", describe(&err));
    }
}

/// Name of the global that draws a chart kind.
pub fn render_function(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "renderLineChart",
        ChartKind::Bar => "renderBarChart",
        ChartKind::Pie => "renderPieChart",
    }
}

/// Initialize chart scripts once D3 has loaded.
///
/// The scripts are stored on `window` and evaluated at global scope by
/// indirect eval from inside a polling loop, then each function is promoted
/// to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [COMMON_JS, LINE_CHART_JS, BAR_CHART_JS, PIE_CHART_JS].join("\n");
    let scripts = match serde_json::to_string(&all_js) {
        Ok(scripts) => scripts,
        Err(err) => {
            log::error!("[WX] failed to encode chart scripts: {}", err);
            return;
        }
    };
    call_js(&format!("window.__wxChartScripts = {scripts};"));

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};\n"))
        .collect();
    call_js(&format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__wxChartScripts);
                    delete window.__wxChartScripts;
                    {promote}
                    window.__wxChartsReady = true;
                    console.log('weather charts initialized');
                }}
            }}, 100);
        }})();
        "#
    ));
}

/// Build the JS that waits for the scripts and the container, then draws.
///
/// The JSON payloads are spliced in as object literals rather than strings.
fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wxChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {data_json}, {config_json});
                    }} catch(e) {{ console.error('[WX] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#
    )
}

/// Render one chart request into its container.
pub fn render_chart(request: &ChartRequest) {
    let (data_json, config_json) = match (request.data_json(), request.config_json()) {
        (Ok(data), Ok(config)) => (data, config),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("[WX] failed to serialize {:?} chart: {}", request.kind, err);
            return;
        }
    };
    call_js(&render_script(
        render_function(request.kind),
        request.container_id(),
        &data_json,
        &config_json,
    ));
}

/// Render all three charts of a frame, together.
pub fn render_frame(frame: &Frame) {
    apply_theme(frame.state.theme);
    for request in &frame.requests {
        render_chart(request);
    }
}

/// Restyle the page body for a theme.
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let palette = theme.palette();
    body.set_class_name(&format!("theme-{theme}"));
    let style = format!(
        "background: {}; color: {}; margin: 0;",
        palette.background, palette.text
    );
    if let Err(err) = body.set_attribute("style", &style) {
        log::warn!("[WX] failed to apply {} theme: {}", theme, describe(&err));
    }
}
