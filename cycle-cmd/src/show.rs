//! `show` command: the single day, week, month or year containing a date.

use crate::dataset;
use crate::list::format_records;
use anyhow::Context;
use cycle_core::{Record, SearchGranularity};
use cycle_db::Database;
use cycle_utils::dates;

pub fn run_show(
    rides_csv: &str,
    granularity: SearchGranularity,
    date: &str,
) -> anyhow::Result<()> {
    let db = dataset::open(rides_csv)?;
    let records = records_containing(&db, granularity, date)?;
    if records.is_empty() {
        println!("No {} entry contains {}", granularity, date);
    } else {
        print!("{}", format_records(&records));
    }
    Ok(())
}

/// Records of the period of `granularity` that `date` falls in.
pub fn records_containing(
    db: &Database,
    granularity: SearchGranularity,
    date: &str,
) -> anyhow::Result<Vec<Record>> {
    let date = dates::parse_date(date).with_context(|| format!("invalid date {date:?}"))?;
    let key = dates::format_date(&granularity.period_start(date));
    db.query_records_on(granularity, &key)
}
