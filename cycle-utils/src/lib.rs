//! Shared utility functions for cycle crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveTime};

    /// Milliseconds in one day, the unit JavaScript timestamps are counted in.
    pub const MILLIS_PER_DAY: i64 = 24 * 3600 * 1000;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Milliseconds since the Unix epoch of the date's UTC midnight.
    ///
    /// Matches what a browser produces for `new Date("YYYY-MM-DD")`.
    pub fn to_timestamp_millis(date: &NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    /// The UTC calendar date a millisecond timestamp falls on.
    ///
    /// Fractional milliseconds are floored. Returns `None` outside chrono's range.
    pub fn date_from_timestamp_millis(millis: f64) -> Option<NaiveDate> {
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis.floor() as i64).map(|dt| dt.date_naive())
    }

    /// Format a millisecond timestamp as "YYYY-MM-DD"
    pub fn format_timestamp_millis(millis: f64) -> Option<String> {
        date_from_timestamp_millis(millis).map(|date| format_date(&date))
    }

}

/// Duration utility functions
pub mod durations {
    /// Format a number of seconds as "hh:mm:ss".
    ///
    /// Hours are not wrapped at 24, long aggregates read e.g. "312:05:09".
    pub fn format_hms(seconds: i64) -> String {
        let sign = if seconds < 0 { "-" } else { "" };
        let seconds = seconds.unsigned_abs();
        format!(
            "{}{:02}:{:02}:{:02}",
            sign,
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )
    }

    /// Average speed in km/h, or 0 when no time was recorded.
    pub fn kilometres_per_hour(km: f64, seconds: i64) -> f64 {
        if seconds <= 0 {
            return 0.0;
        }
        km / (seconds as f64 / 3600.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_hms() {
            assert_eq!(format_hms(0), "00:00:00");
            assert_eq!(format_hms(1800), "00:30:00");
            assert_eq!(format_hms(3661), "01:01:01");
            assert_eq!(format_hms(360_000 + 59), "100:00:59");
        }

        #[test]
        fn test_format_hms_negative() {
            assert_eq!(format_hms(-61), "-00:01:01");
        }

        #[test]
        fn test_kilometres_per_hour() {
            assert!((kilometres_per_hour(10.0, 1800) - 20.0).abs() < 1e-9);
            assert!((kilometres_per_hour(12.0, 2000) - 21.6).abs() < 1e-9);
            assert_eq!(kilometres_per_hour(5.0, 0), 0.0);
        }
    }
}
