//! Chart title with a one-line description of the loaded records.

use cycle_core::{ChartSession, SearchGranularity};
use cycle_utils::durations::format_hms;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Records of the current search, `None` before the first query
    #[props(!optional)]
    pub session: Option<ChartSession>,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let summary = props.session.as_ref().map(session_summary);

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if let Some(summary) = summary {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{summary}"
                }
            }
        }
    }
}

fn record_noun(granularity: SearchGranularity, count: usize) -> &'static str {
    match (granularity, count == 1) {
        (SearchGranularity::Days, true) => "ride",
        (SearchGranularity::Days, false) => "rides",
        (SearchGranularity::Weeks, true) => "week",
        (SearchGranularity::Weeks, false) => "weeks",
        (SearchGranularity::Months, true) => "month",
        (SearchGranularity::Months, false) => "months",
        (SearchGranularity::Years, true) => "year",
        (SearchGranularity::Years, false) => "years",
    }
}

/// e.g. `3 weeks from 2024-01-01 to 2024-01-15: 42.0 km in 02:03:20`
pub fn session_summary(session: &ChartSession) -> String {
    let records = session.records();
    let noun = record_noun(session.granularity(), records.len());
    let (Some(first), Some(last)) = (
        records.iter().map(|r| r.date).min(),
        records.iter().map(|r| r.date).max(),
    ) else {
        return format!("No {noun} in the selected range");
    };
    let km: f64 = records.iter().map(|r| r.km).sum();
    let seconds: i64 = records.iter().map(|r| r.seconds).sum();
    format!(
        "{} {noun} from {first} to {last}: {km:.1} km in {}",
        records.len(),
        format_hms(seconds)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cycle_core::Record;

    fn ride(d: u32, km: f64, seconds: i64) -> Record {
        Record::from_ride(NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), km, seconds)
    }

    #[test]
    fn summarises_weekly_records() {
        let session = ChartSession::new(
            vec![ride(15, 20.0, 3600), ride(1, 10.0, 1800), ride(8, 12.0, 2000)],
            SearchGranularity::Weeks,
        );
        assert_eq!(
            session_summary(&session),
            "3 weeks from 2024-01-01 to 2024-01-15: 42.0 km in 02:03:20"
        );
    }

    #[test]
    fn single_ride_is_singular() {
        let session = ChartSession::new(vec![ride(1, 10.0, 1800)], SearchGranularity::Days);
        assert!(session_summary(&session).starts_with("1 ride from 2024-01-01"));
    }

    #[test]
    fn empty_session() {
        let session = ChartSession::new(Vec::new(), SearchGranularity::Months);
        assert_eq!(session_summary(&session), "No months in the selected range");
    }
}
