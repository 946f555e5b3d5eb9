//! Search granularity selector.

use crate::state::AppState;
use cycle_core::SearchGranularity;
use dioxus::prelude::*;

/// Days, weeks, months or years. Changing it re-queries the records.
#[component]
pub fn GranularitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.granularity)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<SearchGranularity>() {
        Ok(granularity) => state.granularity.set(granularity),
        Err(e) => state.error_msg.set(Some(e.to_string())),
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Search by: "
            select {
                onchange: on_change,
                for granularity in SearchGranularity::ALL {
                    option {
                        value: "{granularity}",
                        selected: granularity == current,
                        "{granularity}"
                    }
                }
            }
        }
    }
}
