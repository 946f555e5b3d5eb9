//! Ride chart
//!
//! Plots daily rides or their weekly, monthly and yearly summaries against a
//! chosen pair of axes. A date x-axis on a scatter chart can be folded into
//! repeating weeks, months or years, one coloured series per cycle.
//!
//! Data flow:
//! 1. `build.rs` copies `rides.csv` into `OUT_DIR`, `include_str!` embeds it.
//! 2. On mount the rides are loaded into an in-memory SQLite database and
//!    the summaries are rolled up. The search range starts as the full range.
//! 3. Changing granularity or dates re-queries the records into a new
//!    `ChartSession`. Changing axes, chart type or fold only rebuilds the
//!    chart from the session's records.
//!
//! The host page loads Chart.js and chartjs-plugin-zoom as globals.

use cycle_chart_ui::components::{
    AxisSelector, AxisSlot, ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay,
    FoldSelector, GranularitySelector, GraphTypeSelector,
};
use cycle_chart_ui::js_bridge;
use cycle_chart_ui::state::AppState;
use cycle_core::ChartSession;
use cycle_db::Database;
use dioxus::prelude::*;
use wasm_bindgen::JsValue;

const RIDES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/rides.csv"));

/// Chart container DOM element ID used by Chart.js to render into.
const CHART_ID: &str = "rides-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("rides-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&JsValue::from_str("[Cycle] rides App component mounted"));

    let mut state = use_context_provider(AppState::new);

    // Load rides and roll up summaries on mount
    use_effect(move || {
        js_bridge::init_charts();
        match load_database() {
            Ok(db) => {
                match db.query_default_range() {
                    Ok(Some((start, end))) => {
                        state.start_date.set(start);
                        state.end_date.set(end);
                    }
                    Ok(None) => log::warn!("No rides in the embedded CSV"),
                    Err(e) => log::error!("Failed to read date range: {}", e),
                }
                state.db.set(Some(db));
            }
            Err(message) => state.error_msg.set(Some(message)),
        }
        state.loading.set(false);
    });

    // Re-query whenever the granularity or date range changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let granularity = (state.granularity)();
        let start = (state.start_date)();
        let end = (state.end_date)();
        if start.is_empty() || end.is_empty() {
            state.session.set(Some(ChartSession::new(Vec::new(), granularity)));
            return;
        }
        match db.query_records(granularity, &start, &end) {
            Ok(records) => {
                log::info!(
                    "[Cycle] {} {} records between {} and {}",
                    records.len(),
                    granularity,
                    start,
                    end
                );
                state.session.set(Some(ChartSession::new(records, granularity)));
            }
            Err(e) => {
                log::error!("Record query failed: {}", e);
                state.error_msg.set(Some(format!("Failed to query rides: {}", e)));
            }
        }
    });

    // Rebuild the chart from the loaded records whenever the selection changes
    use_effect(move || {
        let selection = state.selection();
        let session = state.session.read();
        let Some(session) = session.as_ref() else {
            return;
        };
        let config = session.chart(&selection);
        js_bridge::render_cycle_chart(CHART_ID, &config);
    });

    let session = state.session.read().clone();
    let empty = session.as_ref().is_some_and(|s| s.records().is_empty());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Rides".to_string(),
                session: session,
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    dismissible: state.db.read().is_some(),
                }
            }

            if (state.loading)() {
                ChartContainer {
                    id: CHART_ID.to_string(),
                    loading: true,
                    min_height: 450,
                }
            } else if state.db.read().is_some() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 8px;",
                    GranularitySelector {}
                    DateRangePicker {}
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 8px;",
                    AxisSelector { slot: AxisSlot::X }
                    AxisSelector { slot: AxisSlot::Y }
                    GraphTypeSelector {}
                    FoldSelector {}
                }

                ChartContainer {
                    id: CHART_ID.to_string(),
                    empty: empty,
                    min_height: 450,
                }
            }
        }
    }
}

/// In-memory database holding the embedded rides and their summaries.
fn load_database() -> Result<Database, String> {
    let db = Database::new().map_err(|e| format!("Database initialization failed: {}", e))?;
    if !RIDES_CSV.is_empty() {
        db.load_rides(RIDES_CSV)
            .map_err(|e| format!("Failed to load rides: {}", e))?;
    }
    db.rebuild_summaries()
        .map_err(|e| format!("Failed to build summaries: {}", e))?;
    Ok(db)
}
