//! Axis resolution: which record field a chart axis shows, and in what form.

use crate::error::{ChartError, Result};
use crate::record::Record;
use cycle_utils::dates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The quantity plotted on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    Date,
    Distance,
    Time,
    Speed,
}

impl AxisKind {
    pub const ALL: [AxisKind; 4] = [
        AxisKind::Date,
        AxisKind::Distance,
        AxisKind::Time,
        AxisKind::Speed,
    ];

    /// Name used in forms, axis titles and series labels.
    pub fn name(&self) -> &'static str {
        match self {
            AxisKind::Date => "Date",
            AxisKind::Distance => "Distance",
            AxisKind::Time => "Time",
            AxisKind::Speed => "Speed",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, AxisKind::Date)
    }

    /// Resolve this axis for one record.
    ///
    /// Dates become continuous timestamps on scatter charts and discrete
    /// `YYYY-MM-DD` labels on category (bar/line) charts. The numeric axes pass
    /// their field through unchanged.
    pub fn resolve(&self, record: &Record, graph_type: GraphType) -> AxisValue {
        match self {
            AxisKind::Date if graph_type.is_scatter() => {
                AxisValue::Timestamp(record.timestamp_millis())
            }
            AxisKind::Date => AxisValue::Label(dates::format_date(&record.date)),
            AxisKind::Distance => AxisValue::Number(record.km),
            AxisKind::Time => AxisValue::Integer(record.seconds),
            AxisKind::Speed => AxisValue::Number(record.kmh),
        }
    }

    /// Numeric coordinate of this axis for one record, dates as timestamps.
    pub fn coordinate(&self, record: &Record) -> f64 {
        match self {
            AxisKind::Date => record.timestamp_millis() as f64,
            AxisKind::Distance => record.km,
            AxisKind::Time => record.seconds as f64,
            AxisKind::Speed => record.kmh,
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(AxisKind::Date),
            "distance" | "km" => Ok(AxisKind::Distance),
            "time" | "duration" | "seconds" => Ok(AxisKind::Time),
            "speed" | "kmh" => Ok(AxisKind::Speed),
            _ => Err(ChartError::UnsupportedAxis(s.to_string())),
        }
    }
}

/// How the resolved values are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    Scatter,
    Line,
    Bar,
}

impl GraphType {
    pub const ALL: [GraphType; 3] = [GraphType::Scatter, GraphType::Line, GraphType::Bar];

    pub fn name(&self) -> &'static str {
        match self {
            GraphType::Scatter => "scatter",
            GraphType::Line => "line",
            GraphType::Bar => "bar",
        }
    }

    /// Scatter charts use continuous axes; line and bar use category labels.
    pub fn is_scatter(&self) -> bool {
        matches!(self, GraphType::Scatter)
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scatter" => Ok(GraphType::Scatter),
            "line" => Ok(GraphType::Line),
            "bar" => Ok(GraphType::Bar),
            _ => Err(ChartError::UnsupportedGraphType(s.to_string())),
        }
    }
}

/// A resolved axis value.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisValue {
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// Discrete category label.
    Label(String),
    Number(f64),
    Integer(i64),
}

impl AxisValue {
    /// The value as a plot coordinate; labels have none.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AxisValue::Timestamp(millis) => Some(*millis as f64),
            AxisValue::Number(n) => Some(*n),
            AxisValue::Integer(i) => Some(*i as f64),
            AxisValue::Label(_) => None,
        }
    }

    /// The value as a category label.
    pub fn as_label(&self) -> String {
        match self {
            AxisValue::Timestamp(millis) => {
                dates::format_timestamp_millis(*millis as f64).unwrap_or_else(|| millis.to_string())
            }
            AxisValue::Label(label) => label.clone(),
            AxisValue::Number(n) => n.to_string(),
            AxisValue::Integer(i) => i.to_string(),
        }
    }
}
