//! Reusable Dioxus RSX components for the ride chart app.

mod axis_selector;
mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod fold_selector;
mod granularity_selector;
mod graph_type_selector;

pub use axis_selector::{AxisSelector, AxisSlot};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use fold_selector::FoldSelector;
pub use granularity_selector::GranularitySelector;
pub use graph_type_selector::GraphTypeSelector;
