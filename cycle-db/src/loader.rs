//! Loading rides from CSV and deriving the summary tables.
//!
//! Ride CSV (with headers): `Date,DayKM,DaySeconds[,TotalKM,TotalSeconds]`.

use crate::Database;
use cycle_utils::{dates, durations};
use rusqlite::params;

/// Summary rollups: table, column prefix and the SQLite expression giving
/// the first day of the period a ride falls in.
const SUMMARIES: [(&str, &str, &str); 3] = [
    (
        "fahrrad_weekly_summary",
        "week",
        "date(date, '-6 days', 'weekday 1')",
    ),
    (
        "fahrrad_monthly_summary",
        "month",
        "date(date, 'start of month')",
    ),
    (
        "fahrrad_yearly_summary",
        "year",
        "date(date, 'start of year')",
    ),
];

impl Database {
    /// Load rides from a CSV string.
    ///
    /// Speed is derived from distance and duration. Rows with an unparsable
    /// date, distance or duration are skipped. Returns the number of rides
    /// stored.
    pub fn load_rides(&self, csv_data: &str) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut skipped = 0usize;
        for result in rdr.records() {
            let r = result?;
            let date = match dates::parse_date(r.get(0).unwrap_or("")) {
                Ok(d) => dates::format_date(&d),
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let km: f64 = match r.get(1).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let seconds: i64 = match r.get(2).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            // running totals are informational only
            let total_km: Option<f64> = r.get(3).and_then(|v| v.trim().parse().ok());
            let total_seconds: Option<i64> = r.get(4).and_then(|v| v.trim().parse().ok());
            let kmh = durations::kilometres_per_hour(km, seconds);

            conn.execute(
                "INSERT INTO fahrrad_rides (date, day_km, day_seconds, day_kmh, total_km, total_seconds)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![date, km, seconds, kmh, total_km, total_seconds],
            )?;
            count += 1;
        }
        log::info!(
            "[Cycle] loader: loaded {} rides, skipped {} unparsable rows",
            count,
            skipped
        );
        Ok(count)
    }

    /// Recompute the weekly, monthly and yearly summaries from the rides.
    ///
    /// Weeks start on Monday, months and years on their first day.
    pub fn rebuild_summaries(&self) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        for (table, prefix, period_start) in SUMMARIES {
            tx.execute(&format!("DELETE FROM {table}"), [])?;
            let inserted = tx.execute(
                &format!(
                    "INSERT INTO {table}
                         ({prefix}_starting_on, {prefix}_km, {prefix}_seconds, {prefix}_kmh, {prefix}_days)
                     SELECT {period_start} AS starting_on,
                            SUM(day_km),
                            SUM(day_seconds),
                            CASE WHEN SUM(day_seconds) > 0
                                 THEN SUM(day_km) / (SUM(day_seconds) / 3600.0)
                                 ELSE 0 END,
                            COUNT(DISTINCT date)
                     FROM fahrrad_rides
                     GROUP BY starting_on"
                ),
                [],
            )?;
            log::info!("[Cycle] loader: rebuilt {} with {} rows", table, inserted);
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{sample_db, RIDES_CSV};
    use crate::Database;

    #[test]
    fn loads_rides_with_speed() {
        let db = Database::new().unwrap();
        assert_eq!(db.load_rides(RIDES_CSV).unwrap(), 5);
        let conn = db.conn.borrow();
        let kmh: f64 = conn
            .query_row(
                "SELECT day_kmh FROM fahrrad_rides WHERE date = '2024-01-01'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((kmh - 20.0).abs() < 1e-9);
    }

    #[test]
    fn skips_unparsable_rows() {
        let db = Database::new().unwrap();
        let csv = "Date,DayKM,DaySeconds\n\
                   2024-01-01,10,1800\n\
                   not-a-date,5,600\n\
                   2024-01-02,abc,600\n\
                   2024-01-03,5,\n\
                   2024-01-04,0,0\n";
        assert_eq!(db.load_rides(csv).unwrap(), 2);
        let conn = db.conn.borrow();
        let kmh: f64 = conn
            .query_row(
                "SELECT day_kmh FROM fahrrad_rides WHERE date = '2024-01-04'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(kmh, 0.0);
    }

    #[test]
    fn weeks_start_on_monday() {
        let db = sample_db();
        let conn = db.conn.borrow();
        let mut stmt = conn
            .prepare(
                "SELECT week_starting_on, week_km, week_days
                 FROM fahrrad_weekly_summary ORDER BY week_starting_on",
            )
            .unwrap();
        let rows: Vec<(String, f64, i64)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        // 2024-01-01 is a Monday, 2025-03-02 a Sunday
        assert_eq!(rows[0], ("2024-01-01".to_string(), 30.0, 2));
        assert_eq!(rows[1].0, "2024-01-08");
        assert_eq!(rows.last().unwrap().0, "2025-02-24");
    }

    #[test]
    fn monthly_and_yearly_rollups() {
        let db = sample_db();
        let conn = db.conn.borrow();
        let (km, seconds, kmh): (f64, i64, f64) = conn
            .query_row(
                "SELECT month_km, month_seconds, month_kmh
                 FROM fahrrad_monthly_summary WHERE month_starting_on = '2024-01-01'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(km, 42.0);
        assert_eq!(seconds, 7400);
        assert!((kmh - 42.0 / (7400.0 / 3600.0)).abs() < 1e-9);

        let years: i64 = conn
            .query_row("SELECT COUNT(*) FROM fahrrad_yearly_summary", [], |row| row.get(0))
            .unwrap();
        assert_eq!(years, 2);
    }

    #[test]
    fn rebuilding_twice_replaces_rows() {
        let db = sample_db();
        db.rebuild_summaries().unwrap();
        assert_eq!(db.query_counts().unwrap().months, 3);
    }
}
