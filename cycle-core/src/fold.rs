//! Phase folding: wrapping a date axis into repeating cycles.
//!
//! A fold period of `p` days splits time into cycles starting at a fixed
//! origin. Every timestamp maps to the index of the cycle it falls in and to
//! the equivalent instant inside cycle 0, so all cycles overlay on one range.
//!
//! Month and year are fixed averages, not calendar months/years.

use crate::error::{ChartError, Result};
use cycle_utils::dates::MILLIS_PER_DAY;
use std::fmt;
use std::str::FromStr;

pub const WEEK_DAYS: f64 = 7.0;
/// Average Gregorian month.
pub const MONTH_DAYS: f64 = 30.4;
/// Average year including leap years.
pub const YEAR_DAYS: f64 = 365.25;

/// Length of one fold cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FoldPeriod {
    #[default]
    None,
    Week,
    Month,
    Year,
    /// Caller supplied cycle length in days, always positive and finite.
    Days(f64),
}

impl FoldPeriod {
    pub const NAMED: [FoldPeriod; 4] = [
        FoldPeriod::None,
        FoldPeriod::Week,
        FoldPeriod::Month,
        FoldPeriod::Year,
    ];

    /// A custom period; zero means no folding.
    ///
    /// The period must stay finite once converted to milliseconds.
    pub fn days(days: f64) -> Result<Self> {
        if days == 0.0 {
            Ok(FoldPeriod::None)
        } else if days > 0.0 && (days * MILLIS_PER_DAY as f64).is_finite() {
            Ok(FoldPeriod::Days(days))
        } else {
            Err(ChartError::InvalidFoldPeriod(days.to_string()))
        }
    }

    /// Cycle length in days, `None` when not folding.
    pub fn length_days(&self) -> Option<f64> {
        match self {
            FoldPeriod::None => None,
            FoldPeriod::Week => Some(WEEK_DAYS),
            FoldPeriod::Month => Some(MONTH_DAYS),
            FoldPeriod::Year => Some(YEAR_DAYS),
            FoldPeriod::Days(days) => Some(*days),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FoldPeriod::None)
    }

    /// Name used in series labels, e.g. `Week` in `Distance_Week3`.
    pub fn name(&self) -> String {
        match self {
            FoldPeriod::None => "none".to_string(),
            FoldPeriod::Week => "Week".to_string(),
            FoldPeriod::Month => "Month".to_string(),
            FoldPeriod::Year => "Year".to_string(),
            FoldPeriod::Days(days) => format!("{days}d"),
        }
    }
}

impl fmt::Display for FoldPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for FoldPeriod {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "none" => return Ok(FoldPeriod::None),
            "week" => return Ok(FoldPeriod::Week),
            "month" => return Ok(FoldPeriod::Month),
            "year" => return Ok(FoldPeriod::Year),
            _ => {}
        }
        let days = trimmed
            .strip_suffix('d')
            .unwrap_or(trimmed)
            .parse::<f64>()
            .map_err(|_| ChartError::InvalidFoldPeriod(s.to_string()))?;
        FoldPeriod::days(days).map_err(|_| ChartError::InvalidFoldPeriod(s.to_string()))
    }
}

/// Position of one timestamp after folding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseFold {
    /// Cycle the timestamp falls in; negative before the origin.
    pub cycle: i64,
    /// The equivalent timestamp inside cycle 0, in milliseconds.
    pub offset_millis: f64,
}

/// Fold `timestamp_millis` into cycles of `period_days` starting at `origin_millis`.
///
/// `period_days` must be positive.
pub fn fold(timestamp_millis: f64, origin_millis: f64, period_days: f64) -> PhaseFold {
    debug_assert!(period_days > 0.0, "fold period must be positive");
    let period = period_days * MILLIS_PER_DAY as f64;
    let delta = timestamp_millis - origin_millis;
    let mut cycle = (delta / period).floor();
    let mut within = delta - cycle * period;
    // the quotient can round across an integer; keep `within` in [0, period)
    if within < 0.0 {
        cycle -= 1.0;
        within += period;
    } else if within >= period {
        cycle += 1.0;
        within -= period;
    }
    PhaseFold {
        cycle: cycle as i64,
        offset_millis: origin_millis + within,
    }
}

/// A fold period anchored at a fixed origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseFolder {
    origin_millis: f64,
    period_days: f64,
}

impl PhaseFolder {
    /// Returns `None` when `period` does not fold.
    pub fn new(origin_millis: i64, period: FoldPeriod) -> Option<Self> {
        period.length_days().map(|period_days| Self {
            origin_millis: origin_millis as f64,
            period_days,
        })
    }

    pub fn fold(&self, timestamp_millis: f64) -> PhaseFold {
        fold(timestamp_millis, self.origin_millis, self.period_days)
    }

    pub fn origin_millis(&self) -> f64 {
        self.origin_millis
    }

    pub fn period_days(&self) -> f64 {
        self.period_days
    }
}
