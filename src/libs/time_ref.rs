//! Time reference resolution.
//!
//! Converts compact period tokens such as `2024`, `2024-Q4`, `2025-07`,
//! `2025-W15` or `2025-07-15` into concrete intervals, and derives the token
//! of the period that contains a given instant.
//!
//! ## Interval Shape
//!
//! Every interval starts at midnight of the first day of the period and ends
//! on the last microsecond of the period, so consecutive periods of the same
//! scale touch without overlapping:
//!
//! ```text
//! 2025-07  →  2025-07-01T00:00:00.000000 ..= 2025-07-31T23:59:59.999999
//! 2025-08  →  2025-08-01T00:00:00.000000 ..= 2025-08-31T23:59:59.999999
//! ```
//!
//! ## Week Numbering
//!
//! Weeks follow ISO-8601: a week starts on Monday and week 1 is the week that
//! contains January 4th. The Monday of week 1 may fall in the previous
//! calendar year, e.g. `2025-W1` starts on 2024-12-30.
//!
//! ## Errors
//!
//! - [`TimeRefError::Format`] when a token does not match its scale's grammar
//! - [`TimeRefError::Range`] when a numeric argument is outside its domain
//!
//! ## Usage
//!
//! ```rust
//! use okr::libs::time_ref::{self, TimeScale};
//!
//! let q4 = time_ref::resolve("2024-Q4", TimeScale::Quarter)?;
//! assert_eq!(q4, time_ref::quarter_interval(2024, 4)?);
//! # Ok::<(), okr::libs::time_ref::TimeRefError>(())
//! ```

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})$").expect("valid year regex"));
static QUARTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})-Q([1-4])$").expect("valid quarter regex"));
static MONTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})-(0[1-9]|1[0-2])$").expect("valid month regex"));
static WEEK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-W(0?[1-9]|[1-4][0-9]|5[0-3])$").expect("valid week regex"));
static DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").expect("valid day regex")
});

/// Granularity of a planning period.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeScale {
    pub const ALL: [TimeScale; 5] = [
        TimeScale::Day,
        TimeScale::Week,
        TimeScale::Month,
        TimeScale::Quarter,
        TimeScale::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeScale::Day => "day",
            TimeScale::Week => "week",
            TimeScale::Month => "month",
            TimeScale::Quarter => "quarter",
            TimeScale::Year => "year",
        }
    }

    /// Human readable shape of a reference for this scale, used in error messages.
    pub fn pattern(&self) -> &'static str {
        match self {
            TimeScale::Day => "YYYY-MM-DD",
            TimeScale::Week => "YYYY-Wn",
            TimeScale::Month => "YYYY-MM",
            TimeScale::Quarter => "YYYY-Qn",
            TimeScale::Year => "YYYY",
        }
    }

    fn grammar(&self) -> &'static Regex {
        match self {
            TimeScale::Day => &DAY_RE,
            TimeScale::Week => &WEEK_RE,
            TimeScale::Month => &MONTH_RE,
            TimeScale::Quarter => &QUARTER_RE,
            TimeScale::Year => &YEAR_RE,
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeScale {
    type Err = TimeRefError;

    fn from_str(s: &str) -> Result<Self> {
        TimeScale::ALL
            .into_iter()
            .find(|scale| scale.as_str() == s)
            .ok_or_else(|| TimeRefError::UnknownScale(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeRefError {
    #[error("Invalid {scale} reference '{reference}', expected {}", .scale.pattern())]
    Format { reference: String, scale: TimeScale },

    #[error("{field} must be between {min} and {max}, got {value}")]
    Range {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unknown time scale '{0}'")]
    UnknownScale(String),

    #[error("End {end} is before start {start}")]
    EndBeforeStart { start: NaiveDateTime, end: NaiveDateTime },
}

pub type Result<T> = std::result::Result<T, TimeRefError>;

/// Closed interval `[start, end]` covering one period.
///
/// `end` is the last representable microsecond of the period, one tick before
/// the next period starts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    fn until_next(start: NaiveDate, next_start: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: next_start.and_time(NaiveTime::MIN) - Duration::microseconds(1),
        }
    }

    fn whole_days(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(end_of_day()),
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Number of calendar days touched by the interval.
    pub fn days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).expect("valid end of day")
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(TimeRefError::Range {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(())
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(TimeRefError::Range {
        field: "year",
        value: year.into(),
        min: NaiveDate::MIN.year().into(),
        max: NaiveDate::MAX.year().into(),
    })
}

/// First month (1-based) of quarter `quarter`.
pub fn quarter_start_month(quarter: u32) -> Result<u32> {
    check_range("quarter", quarter, 1, 4)?;
    Ok((quarter - 1) * 3 + 1)
}

/// Number of ISO weeks in `year`, either 52 or 53.
pub fn iso_weeks_in_year(year: i32) -> Result<u32> {
    // Dec 28 always falls in the last ISO week of its year.
    let dec_28 = NaiveDate::from_ymd_opt(year, 12, 28).ok_or(TimeRefError::Range {
        field: "year",
        value: year.into(),
        min: NaiveDate::MIN.year().into(),
        max: NaiveDate::MAX.year().into(),
    })?;
    Ok(dec_28.iso_week().week())
}

/// Checks that `reference` is shaped like a token of `scale`.
///
/// Only the grammar is checked: `2025-W53` passes even though 2025 has 52 ISO
/// weeks, and `2025-02-31` passes even though February has no 31st.
pub fn validate(reference: &str, scale: TimeScale) -> bool {
    scale.grammar().is_match(reference)
}

/// Resolves a reference of the given scale into its interval.
///
/// # Errors
///
/// Returns [`TimeRefError::Format`] when the reference does not match the
/// grammar of `scale` or names a day that does not exist, and
/// [`TimeRefError::Range`] when a week number exceeds the weeks of its year.
pub fn resolve(reference: &str, scale: TimeScale) -> Result<TimeInterval> {
    let format_error = || TimeRefError::Format {
        reference: reference.to_string(),
        scale,
    };
    let caps = scale.grammar().captures(reference).ok_or_else(format_error)?;
    let number = |idx: usize| -> Result<u32> { caps[idx].parse::<u32>().map_err(|_| format_error()) };
    let year = number(1)? as i32;

    match scale {
        TimeScale::Year => year_interval(year),
        TimeScale::Quarter => quarter_interval(year, number(2)?),
        TimeScale::Month => month_interval(year, number(2)?),
        TimeScale::Week => week_interval(year, number(2)?),
        TimeScale::Day => {
            let date = NaiveDate::from_ymd_opt(year, number(2)?, number(3)?).ok_or_else(format_error)?;
            Ok(day_interval(date))
        }
    }
}

pub fn year_interval(year: i32) -> Result<TimeInterval> {
    let start = first_of_month(year, 1)?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(TimeRefError::Range {
        field: "year",
        value: year.into(),
        min: NaiveDate::MIN.year().into(),
        max: NaiveDate::MAX.year().into(),
    })?;
    Ok(TimeInterval::whole_days(start, last))
}

/// Interval of quarter `quarter` (1-4) of `year`.
pub fn quarter_interval(year: i32, quarter: u32) -> Result<TimeInterval> {
    let start_month = quarter_start_month(quarter)?;
    let start = first_of_month(year, start_month)?;
    let next = match quarter {
        4 => first_of_month(year + 1, 1)?,
        _ => first_of_month(year, start_month + 3)?,
    };
    Ok(TimeInterval::until_next(start, next))
}

/// Interval of month `month` (1-12) of `year`.
pub fn month_interval(year: i32, month: u32) -> Result<TimeInterval> {
    check_range("month", month, 1, 12)?;
    let start = first_of_month(year, month)?;
    let next = match month {
        12 => first_of_month(year + 1, 1)?,
        _ => first_of_month(year, month + 1)?,
    };
    Ok(TimeInterval::until_next(start, next))
}

/// Interval of ISO week `week` (1-53) of ISO week-year `year`.
///
/// Week 53 is rejected with [`TimeRefError::Range`] for years that only have
/// 52 ISO weeks, rather than silently spilling into week 1 of the next year.
pub fn week_interval(year: i32, week: u32) -> Result<TimeInterval> {
    check_range("week", week, 1, 53)?;
    let weeks = iso_weeks_in_year(year)?;
    check_range("week", week, 1, weeks)?;

    let jan_4 = first_of_month(year, 1)? + Duration::days(3);
    let week_1_monday = jan_4 - Duration::days(jan_4.weekday().num_days_from_monday().into());
    let monday = week_1_monday + Duration::weeks((week - 1).into());
    Ok(TimeInterval::whole_days(monday, monday + Duration::days(6)))
}

pub fn day_interval(date: NaiveDate) -> TimeInterval {
    TimeInterval::whole_days(date, date)
}

/// Formats a structured `(year, n)` pair as a reference of `scale`.
///
/// `n` is the quarter, month or week number; it is ignored for the year scale.
/// The day scale has no single-number form and is rejected.
pub fn reference_for(scale: TimeScale, year: i32, n: u32) -> Result<String> {
    match scale {
        TimeScale::Year => Ok(format!("{:04}", year)),
        TimeScale::Quarter => {
            check_range("quarter", n, 1, 4)?;
            Ok(format!("{:04}-Q{}", year, n))
        }
        TimeScale::Month => {
            check_range("month", n, 1, 12)?;
            Ok(format!("{:04}-{:02}", year, n))
        }
        TimeScale::Week => {
            check_range("week", n, 1, 53)?;
            Ok(format!("{:04}-W{:02}", year, n))
        }
        TimeScale::Day => Err(TimeRefError::Format {
            reference: format!("{}/{}", year, n),
            scale,
        }),
    }
}

/// Reference of the period of `scale` that contains `now`.
///
/// The week scale uses the ISO week-year, so the last days of December can
/// belong to week 1 of the following year. References carry four-digit years,
/// so instants outside years 0000-9999 give a token that [`resolve`] rejects.
pub fn current_reference(scale: TimeScale, now: NaiveDateTime) -> String {
    match scale {
        TimeScale::Day => now.format("%Y-%m-%d").to_string(),
        TimeScale::Week => {
            let iso = now.date().iso_week();
            format!("{:04}-W{:02}", iso.year(), iso.week())
        }
        TimeScale::Month => now.format("%Y-%m").to_string(),
        TimeScale::Quarter => format!("{:04}-Q{}", now.year(), (now.month() - 1) / 3 + 1),
        TimeScale::Year => format!("{:04}", now.year()),
    }
}

/// Interval of the period of `scale` that contains `now`.
pub fn current_interval(scale: TimeScale, now: NaiveDateTime) -> Result<TimeInterval> {
    resolve(&current_reference(scale, now), scale)
}

/// Interval from `start` to `end`, or to the end of the `scale` period that
/// contains `start` when no end is given.
///
/// # Errors
///
/// Returns [`TimeRefError::EndBeforeStart`] when `end` precedes `start`.
pub fn span_from(scale: TimeScale, start: NaiveDateTime, end: Option<NaiveDateTime>) -> Result<TimeInterval> {
    let end = match end {
        Some(end) => end,
        None => current_interval(scale, start)?.end,
    };
    if end < start {
        return Err(TimeRefError::EndBeforeStart { start, end });
    }
    Ok(TimeInterval { start, end })
}
