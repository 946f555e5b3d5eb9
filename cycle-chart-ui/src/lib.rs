//! Shared Dioxus components and Chart.js bridge for the ride chart app.
//!
//! - `js_bridge`: Rust wrappers for the Chart.js functions via `js_sys::eval()`
//! - `state`: reactive `AppState` built from Dioxus signals
//! - `components`: form controls and chart containers

pub mod js_bridge;
pub mod state;
pub mod components;
