//! Fold period selector.

use crate::state::AppState;
use cycle_core::ui_state::fold_options;
use cycle_core::FoldPeriod;
use dioxus::prelude::*;

/// Fold period choices, rendered only for a date x-axis on a scatter chart
/// of non-yearly records.
#[component]
pub fn FoldSelector() -> Element {
    let mut state = use_context::<AppState>();
    if !state.fold_control_visible() {
        return rsx! {};
    }
    let current = (state.fold_period)();
    let options = fold_options((state.granularity)());

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<FoldPeriod>() {
        Ok(period) => state.fold_period.set(period),
        Err(e) => state.error_msg.set(Some(e.to_string())),
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Fold by: "
            select {
                onchange: on_change,
                for period in options {
                    option {
                        value: "{period.name()}",
                        selected: period == current,
                        "{period}"
                    }
                }
            }
        }
    }
}
