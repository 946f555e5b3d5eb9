//! Query result structs that are not chart records.

use serde::Serialize;

/// Number of rows per granularity.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DatasetCounts {
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
    pub years: i64,
}
