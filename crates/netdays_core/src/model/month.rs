//! Calendar month selector.
//!
//! # Responsibility
//! - Validate `(year, month)` pairs against the supported date range.
//! - Provide weekday/length facts used by grid generation.
//! - Support relative navigation and `YYYY-MM` parsing.
//!
//! # Invariants
//! - A constructed `Month` always has a representable first day and a
//!   representable first day of the following month.

use chrono::{Datelike, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static MONTH_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d{1,6})-(\d{1,2})$").expect("valid month label regex"));

/// Month selection errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthError {
    /// Month number outside `1..=12`.
    InvalidMonth(u32),
    /// Year/month outside the supported calendar range.
    OutOfRange { year: i64, month: i64 },
    /// Label did not match `YYYY-MM`.
    Unparsable(String),
}

impl Display for MonthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "month must be within 1..=12, got {month}"),
            Self::OutOfRange { year, month } => {
                write!(f, "month {year}-{month:02} is outside the supported range")
            }
            Self::Unparsable(value) => write!(f, "expected `YYYY-MM`, got `{value}`"),
        }
    }
}

impl Error for MonthError {}

/// One calendar month, 1-based (`month == 1` is January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthParts", into = "MonthParts")]
pub struct Month {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    days_in_month: u32,
}

#[derive(Serialize, Deserialize)]
struct MonthParts {
    year: i32,
    month: u32,
}

impl TryFrom<MonthParts> for Month {
    type Error = MonthError;

    fn try_from(value: MonthParts) -> Result<Self, Self::Error> {
        Month::new(value.year, value.month)
    }
}

impl From<Month> for MonthParts {
    fn from(value: Month) -> Self {
        Self {
            year: value.year,
            month: value.month,
        }
    }
}

impl Month {
    /// Creates a validated month.
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::InvalidMonth(month));
        }
        let out_of_range = || MonthError::OutOfRange {
            year: i64::from(year),
            month: i64::from(month),
        };
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let next_first = first_day
            .checked_add_months(Months::new(1))
            .ok_or_else(out_of_range)?;
        let days_in_month = u32::try_from(next_first.signed_duration_since(first_day).num_days())
            .map_err(|_| out_of_range())?;

        Ok(Self {
            year,
            month,
            first_day,
            days_in_month,
        })
    }

    /// Month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        let first_day = date.with_day(1).unwrap_or(date);
        let days_in_month = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| u32::try_from(next.signed_duration_since(first_day).num_days()).ok())
            // Only the last representable month lacks a successor; it is December.
            .unwrap_or(31);
        Self {
            year: date.year(),
            month: date.month(),
            first_day,
            days_in_month,
        }
    }

    /// Parses a `YYYY-MM` label, e.g. `2024-02`.
    pub fn parse(value: &str) -> Result<Self, MonthError> {
        let trimmed = value.trim();
        let caps = MONTH_LABEL_RE
            .captures(trimmed)
            .ok_or_else(|| MonthError::Unparsable(trimmed.to_string()))?;
        let year = caps[1]
            .parse::<i32>()
            .map_err(|_| MonthError::Unparsable(trimmed.to_string()))?;
        let month = caps[2]
            .parse::<u32>()
            .map_err(|_| MonthError::Unparsable(trimmed.to_string()))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Weekday of day 1, `0 = Sunday ... 6 = Saturday`.
    pub fn first_weekday(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    /// Moves by `delta` months, rolling the year in both directions.
    pub fn shift(&self, delta: i32) -> Result<Self, MonthError> {
        let zero_based = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = zero_based.div_euclid(12);
        let month = zero_based.rem_euclid(12) + 1;
        let out_of_range = MonthError::OutOfRange { year, month };
        let year = i32::try_from(year).map_err(|_| out_of_range.clone())?;
        let month = u32::try_from(month).map_err(|_| out_of_range.clone())?;
        Self::new(year, month).map_err(|_| out_of_range)
    }

    /// `YYYY-MM` label.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
