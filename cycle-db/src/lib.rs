//! In-memory SQLite store for cycling rides.
//!
//! Rides are loaded from CSV, rolled up into weekly, monthly and yearly
//! summary tables, and read back as [`cycle_core::Record`]s for a search
//! granularity and date range.
//!
//! ```rust
//! use cycle_core::SearchGranularity;
//! use cycle_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_rides("Date,DayKM,DaySeconds\n2024-01-01,10,1800\n").unwrap();
//! db.rebuild_summaries().unwrap();
//! let records = db
//!     .query_records(SearchGranularity::Weeks, "2024-01-01", "2024-12-31")
//!     .unwrap();
//! assert_eq!(records.len(), 1);
//! ```
//!
//! See [`schema::create_schema`] for the tables.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// Ride database shared between the CLI and the chart app.
///
/// Clones share one connection, which suits the single-threaded WASM app.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok());
    }

    #[test]
    fn clones_share_the_connection() {
        let db = Database::new().unwrap();
        let other = db.clone();
        db.load_rides("Date,DayKM,DaySeconds\n2024-05-01,5,900\n").unwrap();
        assert_eq!(other.query_counts().unwrap().days, 1);
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let counts = db.query_counts().unwrap();
        assert_eq!(counts.days + counts.weeks + counts.months + counts.years, 0);
        assert_eq!(db.query_default_range().unwrap(), None);
    }
}
