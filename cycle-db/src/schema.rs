//! Table definitions.
//!
//! `fahrrad_rides` holds one row per ride. The three summary tables share
//! one shape and are keyed by the first day of their period.

use cycle_core::SearchGranularity;

pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS fahrrad_rides (
        entry_id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        day_km REAL NOT NULL,
        day_seconds INTEGER NOT NULL,
        day_kmh REAL NOT NULL,
        total_km REAL,
        total_seconds INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_rides_date ON fahrrad_rides(date);

    CREATE TABLE IF NOT EXISTS fahrrad_weekly_summary (
        week_starting_on TEXT PRIMARY KEY,
        week_km REAL NOT NULL,
        week_seconds INTEGER NOT NULL,
        week_kmh REAL NOT NULL,
        week_days INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS fahrrad_monthly_summary (
        month_starting_on TEXT PRIMARY KEY,
        month_km REAL NOT NULL,
        month_seconds INTEGER NOT NULL,
        month_kmh REAL NOT NULL,
        month_days INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS fahrrad_yearly_summary (
        year_starting_on TEXT PRIMARY KEY,
        year_km REAL NOT NULL,
        year_seconds INTEGER NOT NULL,
        year_kmh REAL NOT NULL,
        year_days INTEGER NOT NULL
    );
    "#
}

/// Where the records of one granularity live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTable {
    pub table: &'static str,
    /// Column prefix, e.g. `week` for `week_km`.
    pub prefix: &'static str,
    pub date_column: &'static str,
}

impl RecordTable {
    pub fn for_granularity(granularity: SearchGranularity) -> Self {
        match granularity {
            SearchGranularity::Days => Self {
                table: "fahrrad_rides",
                prefix: "day",
                date_column: "date",
            },
            SearchGranularity::Weeks => Self {
                table: "fahrrad_weekly_summary",
                prefix: "week",
                date_column: "week_starting_on",
            },
            SearchGranularity::Months => Self {
                table: "fahrrad_monthly_summary",
                prefix: "month",
                date_column: "month_starting_on",
            },
            SearchGranularity::Years => Self {
                table: "fahrrad_yearly_summary",
                prefix: "year",
                date_column: "year_starting_on",
            },
        }
    }

    /// `SELECT` of date, km, seconds and km/h for an inclusive date range.
    pub fn select_range_sql(&self) -> String {
        let Self {
            table,
            prefix,
            date_column,
        } = self;
        format!(
            "SELECT {date_column}, {prefix}_km, {prefix}_seconds, {prefix}_kmh
             FROM {table}
             WHERE {date_column} BETWEEN ?1 AND ?2
             ORDER BY {date_column}"
        )
    }

    /// `SELECT` of the records keyed by one date, in insertion order.
    pub fn select_on_sql(&self) -> String {
        let Self {
            table,
            prefix,
            date_column,
        } = self;
        format!(
            "SELECT {date_column}, {prefix}_km, {prefix}_seconds, {prefix}_kmh
             FROM {table}
             WHERE {date_column} = ?1
             ORDER BY rowid"
        )
    }
}
