//! Pay period window and calendar cell models.
//!
//! This module contains the [`PayPeriod`] window (16th of one month through
//! the 15th of the next, by default) and the [`DateRangeEntry`] descriptors
//! produced for each calendar cell in the window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day in the attendance grid.
///
/// Entries are generated from the selected month and year and never
/// stored. `month` is the calendar month (1 to 12) and `key` is the
/// `YYYY-MM-DD` form of `date`.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::DateRangeEntry;
/// use chrono::NaiveDate;
///
/// let entry = DateRangeEntry::new(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(entry.day, 29);
/// assert_eq!(entry.month, 2);
/// assert_eq!(entry.year, 2024);
/// assert_eq!(entry.key, "2024-02-29");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeEntry {
    /// Day of month.
    pub day: u32,
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// The resolved date.
    pub date: NaiveDate,
    /// Stable `YYYY-MM-DD` key.
    pub key: String,
}

impl DateRangeEntry {
    /// Builds the entry for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
            date,
            key: date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// An inclusive pay period window.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
/// };
///
/// assert_eq!(period.len_days(), 31);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the window (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the window (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of days in the window, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
