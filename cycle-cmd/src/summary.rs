//! `summary` command: what the rides CSV contains.

use crate::dataset;
use cycle_db::models::DatasetCounts;

pub fn run_summary(rides_csv: &str) -> anyhow::Result<()> {
    let db = dataset::open(rides_csv)?;
    let counts = db.query_counts()?;
    let range = db.query_default_range()?;
    print!("{}", format_summary(&counts, range.as_ref()));
    Ok(())
}

pub fn format_summary(counts: &DatasetCounts, range: Option<&(String, String)>) -> String {
    let mut out = format!(
        "Number of days: {}\nNumber of weeks: {}\nNumber of months: {}\nNumber of years: {}\n",
        counts.days, counts.weeks, counts.months, counts.years
    );
    match range {
        Some((start, end)) => out.push_str(&format!("Date range: {start} to {end}\n")),
        None => out.push_str("Date range: no rides\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{open_str, tests::RIDES};

    #[test]
    fn summarises_sample_rides() {
        let db = open_str(RIDES).unwrap();
        let counts = db.query_counts().unwrap();
        let range = db.query_default_range().unwrap();
        let text = format_summary(&counts, range.as_ref());
        assert!(text.contains("Number of days: 3\n"));
        assert!(text.contains("Number of weeks: 3\n"));
        assert!(text.contains("Number of months: 2\n"));
        assert!(text.contains("Number of years: 1\n"));
        assert!(text.contains("Date range: 2024-01-01 to 2024-03-20"));
    }

    #[test]
    fn empty_summary() {
        let text = format_summary(&DatasetCounts::default(), None);
        assert!(text.contains("Number of days: 0"));
        assert!(text.ends_with("Date range: no rides\n"));
    }
}
