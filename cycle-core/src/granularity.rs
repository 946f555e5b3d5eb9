use crate::error::{ChartError, Result};
use crate::fold::{MONTH_DAYS, WEEK_DAYS, YEAR_DAYS};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation level of the record set: single rides or week/month/year summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchGranularity {
    Days,
    Weeks,
    Months,
    Years,
}

impl SearchGranularity {
    pub const ALL: [SearchGranularity; 4] = [
        SearchGranularity::Days,
        SearchGranularity::Weeks,
        SearchGranularity::Months,
        SearchGranularity::Years,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchGranularity::Days => "Days",
            SearchGranularity::Weeks => "Weeks",
            SearchGranularity::Months => "Months",
            SearchGranularity::Years => "Years",
        }
    }

    /// Nominal number of days one record covers.
    ///
    /// Uses the same average month and year as the fold periods so that a
    /// Month fold over monthly records compares equal.
    pub fn span_days(&self) -> f64 {
        match self {
            SearchGranularity::Days => 1.0,
            SearchGranularity::Weeks => WEEK_DAYS,
            SearchGranularity::Months => MONTH_DAYS,
            SearchGranularity::Years => YEAR_DAYS,
        }
    }

    /// First day of the record `date` belongs to: the day itself, its
    /// Monday, or the first of its month or year.
    pub fn period_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            SearchGranularity::Days => date,
            SearchGranularity::Weeks => {
                date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            }
            SearchGranularity::Months => date.with_day(1).unwrap_or(date),
            SearchGranularity::Years => date.with_ordinal(1).unwrap_or(date),
        }
    }
}

impl fmt::Display for SearchGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchGranularity {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" | "day" => Ok(SearchGranularity::Days),
            "weeks" | "week" => Ok(SearchGranularity::Weeks),
            "months" | "month" => Ok(SearchGranularity::Months),
            "years" | "year" => Ok(SearchGranularity::Years),
            _ => Err(ChartError::UnsupportedGranularity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for granularity in SearchGranularity::ALL {
            assert_eq!(
                granularity.to_string().parse::<SearchGranularity>(),
                Ok(granularity)
            );
        }
        assert_eq!("week".parse::<SearchGranularity>(), Ok(SearchGranularity::Weeks));
        assert_eq!(
            "Decades".parse::<SearchGranularity>(),
            Err(ChartError::UnsupportedGranularity("Decades".to_string()))
        );
    }

    #[test]
    fn period_start_snaps_to_record_key() {
        let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        // 2024-03-20 is a Wednesday
        assert_eq!(SearchGranularity::Days.period_start(day(3, 20)), day(3, 20));
        assert_eq!(SearchGranularity::Weeks.period_start(day(3, 20)), day(3, 18));
        assert_eq!(SearchGranularity::Weeks.period_start(day(3, 18)), day(3, 18));
        assert_eq!(SearchGranularity::Months.period_start(day(3, 20)), day(3, 1));
        assert_eq!(SearchGranularity::Years.period_start(day(3, 20)), day(1, 1));
    }

    #[test]
    fn spans_increase() {
        let spans: Vec<f64> = SearchGranularity::ALL.iter().map(|g| g.span_days()).collect();
        assert!(spans.windows(2).all(|w| w[0] < w[1]));
    }
}
