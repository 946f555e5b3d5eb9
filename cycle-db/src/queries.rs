//! Typed queries returning chart records and dataset metadata.

use crate::models::DatasetCounts;
use crate::schema::RecordTable;
use crate::Database;
use cycle_core::{Record, SearchGranularity};
use cycle_utils::dates;
use rusqlite::{params, OptionalExtension};

impl Database {
    /// Records of `granularity` whose date lies in `start..=end`, oldest first.
    ///
    /// Dates are `YYYY-MM-DD`. Daily records are single rides, coarser ones
    /// are keyed by the first day of their week, month or year.
    pub fn query_records(
        &self,
        granularity: SearchGranularity,
        start_date: &str,
        end_date: &str,
    ) -> anyhow::Result<Vec<Record>> {
        let table = RecordTable::for_granularity(granularity);
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&table.select_range_sql())?;
        let rows = stmt
            .query_map(params![start_date, end_date], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, f64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        let records = to_records(rows)?;
        log::info!(
            "[Cycle] query: query_records({}, {}..{}) returned {} records from {}",
            granularity,
            start_date,
            end_date,
            records.len(),
            table.table
        );
        Ok(records)
    }

    /// Records keyed by exactly `date`: the rides of that day, or the
    /// summary starting on it. Empty when there is none.
    pub fn query_records_on(
        &self,
        granularity: SearchGranularity,
        date: &str,
    ) -> anyhow::Result<Vec<Record>> {
        let table = RecordTable::for_granularity(granularity);
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&table.select_on_sql())?;
        let rows = stmt
            .query_map(params![date], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, f64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        let records = to_records(rows)?;
        log::info!(
            "[Cycle] query: query_records_on({}, {}) returned {} records",
            granularity,
            date,
            records.len()
        );
        Ok(records)
    }

    /// Initial search range: start of the first summarised year through the
    /// latest ride. `None` when no rides are loaded or summaries are missing.
    pub fn query_default_range(&self) -> anyhow::Result<Option<(String, String)>> {
        let conn = self.conn.borrow();
        let range: Option<(Option<String>, Option<String>)> = conn
            .query_row(
                "SELECT (SELECT MIN(year_starting_on) FROM fahrrad_yearly_summary),
                        (SELECT MAX(date) FROM fahrrad_rides)",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let range = match range {
            Some((Some(start), Some(end))) => Some((start, end)),
            _ => None,
        };
        log::info!("[Cycle] query: query_default_range returned {:?}", range);
        Ok(range)
    }

    /// Row counts of the ride and summary tables.
    pub fn query_counts(&self) -> anyhow::Result<DatasetCounts> {
        let conn = self.conn.borrow();
        let counts = conn.query_row(
            "SELECT (SELECT COUNT(*) FROM fahrrad_rides),
                    (SELECT COUNT(*) FROM fahrrad_weekly_summary),
                    (SELECT COUNT(*) FROM fahrrad_monthly_summary),
                    (SELECT COUNT(*) FROM fahrrad_yearly_summary)",
            [],
            |row| {
                Ok(DatasetCounts {
                    days: row.get(0)?,
                    weeks: row.get(1)?,
                    months: row.get(2)?,
                    years: row.get(3)?,
                })
            },
        )?;
        log::info!("[Cycle] query: query_counts returned {:?}", counts);
        Ok(counts)
    }
}

fn to_records(rows: Vec<(String, f64, i64, f64)>) -> anyhow::Result<Vec<Record>> {
    rows.into_iter()
        .map(|(date, km, seconds, kmh)| {
            Ok(Record::new(dates::parse_date(&date)?, km, seconds, kmh))
        })
        .collect()
}
