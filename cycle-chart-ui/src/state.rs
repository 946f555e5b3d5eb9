//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into one struct provided with
//! `use_context_provider`. Components read it with `use_context::<AppState>()`.

use cycle_core::{AxisKind, ChartSession, FoldPeriod, GraphType, SearchGranularity, Selection};
use cycle_db::Database;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    pub granularity: Signal<SearchGranularity>,
    /// Start of the search range (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// End of the search range (YYYY-MM-DD)
    pub end_date: Signal<String>,
    pub x_axis: Signal<AxisKind>,
    pub y_axis: Signal<AxisKind>,
    pub graph_type: Signal<GraphType>,
    pub fold_period: Signal<FoldPeriod>,
    /// Records of the current search; replaced on every re-query
    pub session: Signal<Option<ChartSession>>,
}

impl AppState {
    pub fn new() -> Self {
        let selection = Selection::default();
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            granularity: Signal::new(SearchGranularity::Days),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            x_axis: Signal::new(selection.x_axis),
            y_axis: Signal::new(selection.y_axis),
            graph_type: Signal::new(selection.graph_type),
            fold_period: Signal::new(selection.fold_period),
            session: Signal::new(None),
        }
    }

    /// Current selection. Reading it subscribes the caller to all four controls.
    pub fn selection(&self) -> Selection {
        Selection::new(
            (self.x_axis)(),
            (self.y_axis)(),
            (self.graph_type)(),
            (self.fold_period)(),
        )
    }

    /// Whether the fold selector is offered for the current controls.
    pub fn fold_control_visible(&self) -> bool {
        cycle_core::ui_state::should_show_fold_control(
            (self.x_axis)(),
            (self.graph_type)(),
            (self.granularity)(),
        )
    }
}
