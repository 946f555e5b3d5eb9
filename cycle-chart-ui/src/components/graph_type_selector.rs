//! Chart type selector.

use crate::state::AppState;
use cycle_core::GraphType;
use dioxus::prelude::*;

#[component]
pub fn GraphTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.graph_type)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<GraphType>() {
        Ok(graph_type) => state.graph_type.set(graph_type),
        Err(e) => state.error_msg.set(Some(e.to_string())),
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Graph: "
            select {
                onchange: on_change,
                for graph_type in GraphType::ALL {
                    option {
                        value: "{graph_type}",
                        selected: graph_type == current,
                        "{graph_type}"
                    }
                }
            }
        }
    }
}
