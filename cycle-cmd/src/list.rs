//! `list` command: plain-text record listing.

use crate::{dataset, SourceArgs};
use cycle_core::Record;
use cycle_utils::dates;
use std::fmt::Write;

pub fn run_list(source: &SourceArgs) -> anyhow::Result<()> {
    let db = dataset::open(&source.rides_csv)?;
    let records = dataset::records(&db, source)?;
    print!("{}", format_records(&records));
    Ok(())
}

/// Entry count followed by one numbered block per record.
pub fn format_records(records: &[Record]) -> String {
    let mut out = format!("Number of entries found: {}\n", records.len());
    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {}", i + 1, dates::format_date(&record.date));
        let _ = writeln!(out, "   Distance: {:.2} km", record.km);
        let _ = writeln!(
            out,
            "   Time:     {} s ({})",
            record.seconds,
            record.formatted_time()
        );
        let _ = writeln!(out, "   Speed:    {:.2} km/h", record.kmh);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn lists_count_and_records() {
        let records = vec![Record::from_ride(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            10.0,
            1800,
        )];
        let text = format_records(&records);
        assert!(text.starts_with("Number of entries found: 1\n"));
        assert!(text.contains("1. 2024-01-01"));
        assert!(text.contains("Distance: 10.00 km"));
        assert!(text.contains("1800 s (00:30:00)"));
        assert!(text.contains("Speed:    20.00 km/h"));
    }

    #[test]
    fn empty_listing() {
        assert_eq!(format_records(&[]), "Number of entries found: 0\n");
    }
}
