//! Loading the rides CSV and resolving the search range.

use crate::SourceArgs;
use anyhow::Context;
use cycle_core::Record;
use cycle_db::Database;
use cycle_utils::dates;

/// In-memory database filled from the rides CSV at `path`.
pub fn open(path: &str) -> anyhow::Result<Database> {
    let csv_data =
        std::fs::read_to_string(path).with_context(|| format!("reading rides CSV {path}"))?;
    open_str(&csv_data)
}

pub fn open_str(csv_data: &str) -> anyhow::Result<Database> {
    let db = Database::new()?;
    db.load_rides(csv_data)?;
    db.rebuild_summaries()?;
    Ok(db)
}

/// Search range, filling a missing bound from the database default.
///
/// `None` when a bound is missing and the database has no rides.
pub fn resolve_range(
    db: &Database,
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<Option<(String, String)>> {
    let start = start.map(normalize_date).transpose()?;
    let end = end.map(normalize_date).transpose()?;
    if let (Some(start), Some(end)) = (&start, &end) {
        return Ok(Some((start.clone(), end.clone())));
    }
    let Some((default_start, default_end)) = db.query_default_range()? else {
        return Ok(None);
    };
    Ok(Some((
        start.unwrap_or(default_start),
        end.unwrap_or(default_end),
    )))
}

fn normalize_date(s: &str) -> anyhow::Result<String> {
    let date = dates::parse_date(s).with_context(|| format!("invalid date {s:?}"))?;
    Ok(dates::format_date(&date))
}

/// Records selected by `source` from an already opened database.
pub fn records(db: &Database, source: &SourceArgs) -> anyhow::Result<Vec<Record>> {
    match resolve_range(db, source.start.as_deref(), source.end.as_deref())? {
        Some((start, end)) => db.query_records(source.granularity, &start, &end),
        None => {
            log::warn!("no rides loaded, nothing to select");
            Ok(Vec::new())
        }
    }
}
