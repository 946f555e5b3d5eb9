/// Error types for chart pipeline operations
use thiserror::Error;

/// Main error type for the chart pipeline.
///
/// Every variant is recoverable; the caller decides whether to show an error
/// banner or keep the previous chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Axis name that does not map to a record field
    #[error("Axis '{0}' is not supported. Expected: Date, Distance, Time, or Speed")]
    UnsupportedAxis(String),

    /// Graph type the chart cannot be drawn as
    #[error("Graph type '{0}' is not supported. Expected: scatter, line, or bar")]
    UnsupportedGraphType(String),

    /// Search granularity outside Days/Weeks/Months/Years
    #[error("Search type '{0}' is not supported. Expected: Days, Weeks, Months, or Years")]
    UnsupportedGranularity(String),

    /// Fold value that is neither a known period nor a positive number of days
    #[error("Fold period '{0}' is invalid. Expected: none, Week, Month, Year, or a positive number of days")]
    InvalidFoldPeriod(String),
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
