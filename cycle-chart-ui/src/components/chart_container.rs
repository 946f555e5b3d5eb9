//! Container the Chart.js canvas is created in.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Chart.js renders into
    pub id: String,
    /// Rides are still being loaded into the database
    #[props(default = false)]
    pub loading: bool,
    /// The current search returned no records
    #[props(default = false)]
    pub empty: bool,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// Canvas host with overlays for loading and empty searches.
///
/// The canvas div stays mounted under the overlays so an empty chart keeps
/// its axes and zoom state.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let overlay = if props.loading {
        Some("Loading rides...")
    } else if props.empty {
        Some("No rides in the selected range. Widen the dates or change the granularity.")
    } else {
        None
    };

    rsx! {
        div {
            style: "min-height: {props.min_height}px; position: relative; width: 100%;",
            if let Some(text) = overlay {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; text-align: center;",
                    "{text}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: {props.min_height}px;",
            }
        }
    }
}
