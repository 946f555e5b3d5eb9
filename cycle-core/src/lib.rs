//! Charting engine for cycling ride records.
//!
//! Records flow through the pipeline in one direction:
//! - `axis`: resolve a record field for the chosen x/y axis
//! - `fold`: wrap dates into repeating week/month/year cycles
//! - `series`: group points into coloured series
//! - `chart`: assemble the Chart.js configuration
//!
//! `session::ChartSession` runs the whole pipeline for one record set and
//! `ui_state` decides which selection controls are offered.

pub mod axis;
pub mod chart;
pub mod error;
pub mod fold;
pub mod granularity;
pub mod record;
pub mod selection;
pub mod series;
pub mod session;
pub mod ui_state;

pub use axis::{AxisKind, AxisValue, GraphType};
pub use chart::{ChartConfig, TickFormat};
pub use error::{ChartError, Result};
pub use fold::{FoldPeriod, PhaseFold, PhaseFolder};
pub use granularity::SearchGranularity;
pub use record::Record;
pub use selection::Selection;
pub use series::{ChartData, Series, SeriesKey};
pub use session::ChartSession;
