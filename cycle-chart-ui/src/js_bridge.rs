//! JS interop via `js_sys::eval()`.
//!
//! `assets/js/cycle-chart.js` is embedded at compile time and evaluated at
//! global scope once Chart.js has loaded.

use cycle_core::ChartConfig;

static CYCLE_CHART_JS: &str = include_str!("../assets/js/cycle-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Cycle JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load the chart script once `Chart` is defined. Safe to call repeatedly.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__cycleChartsReady) {{ window.__cycleChartScripts = {}; }}",
        serde_json::to_string(CYCLE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__cycleChartsReady || window.__cycleChartsPolling) return;
            window.__cycleChartsPolling = true;
            var waitForChartJs = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChartJs);
                    (0, eval)(window.__cycleChartScripts);
                    delete window.__cycleChartScripts;
                    window.renderCycleChart = renderCycleChart;
                    window.destroyCycleChart = destroyCycleChart;
                    window.__cycleChartsReady = true;
                    console.log('Cycle charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Quote `s` as a single-quoted JS string literal body.
fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Render `config` into the container, replacing any chart already there.
///
/// Polls until the script is initialized and the container exists.
pub fn render_cycle_chart(container_id: &str, config: &ChartConfig) {
    let config_json = match config.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart config: {}", e);
            return;
        }
    };
    log::info!(
        "[Cycle] rendering {} chart with {} datasets",
        config.chart_type,
        config.dataset_count()
    );
    let escaped = escape_js(&config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cycleChartsReady && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderCycleChart('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[Cycle] renderCycleChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart in the container, if any.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyCycleChart) {{ window.destroyCycleChart('{container_id}'); }}"
    ));
}
