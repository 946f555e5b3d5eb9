use chrono::NaiveDate;
use cycle_utils::{dates, durations};
use serde::{Deserialize, Serialize};

/// One row returned by the data source: a single ride, or one week/month/year
/// summary depending on the search granularity.
///
/// Field names serialize as the columns the queries alias them to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Ride date, or the first day of the summarised week/month/year.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Distance in kilometres.
    #[serde(rename = "KM")]
    pub km: f64,
    /// Riding time in seconds.
    #[serde(rename = "Seconds")]
    pub seconds: i64,
    /// Average speed in km/h.
    #[serde(rename = "KMH")]
    pub kmh: f64,
}

impl Record {
    pub fn new(date: NaiveDate, km: f64, seconds: i64, kmh: f64) -> Self {
        Self {
            date,
            km,
            seconds,
            kmh,
        }
    }

    /// Build a record from distance and time, deriving the speed.
    pub fn from_ride(date: NaiveDate, km: f64, seconds: i64) -> Self {
        Self::new(date, km, seconds, durations::kilometres_per_hour(km, seconds))
    }

    /// UTC midnight of `date` in milliseconds.
    pub fn timestamp_millis(&self) -> i64 {
        dates::to_timestamp_millis(&self.date)
    }

    /// Riding time as "hh:mm:ss".
    pub fn formatted_time(&self) -> String {
        durations::format_hms(self.seconds)
    }
}

/// Earliest date in a record set, used as the fold origin.
pub fn earliest_date(records: &[Record]) -> Option<NaiveDate> {
    records.iter().map(|r| r.date).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_ride_derives_speed() {
        let record = Record::from_ride(date(2024, 1, 1), 10.0, 1800);
        assert!((record.kmh - 20.0).abs() < 1e-9);
        assert_eq!(record.formatted_time(), "00:30:00");
    }

    #[test]
    fn serializes_with_column_names() {
        let record = Record::new(date(2024, 1, 8), 12.0, 2000, 21.6);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Date"], "2024-01-08");
        assert_eq!(json["KM"], 12.0);
        assert_eq!(json["Seconds"], 2000);
        assert_eq!(json["KMH"], 21.6);
    }

    #[test]
    fn deserializes_from_row_json() {
        let record: Record = serde_json::from_str(
            r#"{"Date":"2024-01-01","KM":10,"Seconds":1800,"KMH":20}"#,
        )
        .unwrap();
        assert_eq!(record.date, date(2024, 1, 1));
        assert_eq!(record.seconds, 1800);
    }

    #[test]
    fn earliest_date_ignores_order() {
        let records = vec![
            Record::from_ride(date(2024, 3, 1), 1.0, 60),
            Record::from_ride(date(2023, 12, 24), 1.0, 60),
            Record::from_ride(date(2024, 1, 1), 1.0, 60),
        ];
        assert_eq!(earliest_date(&records), Some(date(2023, 12, 24)));
        assert_eq!(earliest_date(&[]), None);
    }
}
