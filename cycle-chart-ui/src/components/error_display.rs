//! Error banner for load failures and rejected selections.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Show a button clearing `AppState::error_msg`
    #[props(default = true)]
    pub dismissible: bool,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; justify-content: space-between; align-items: center;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            if props.dismissible {
                button {
                    style: "border: none; background: transparent; color: #C62828; cursor: pointer;",
                    onclick: move |_| state.error_msg.set(None),
                    "Dismiss"
                }
            }
        }
    }
}
