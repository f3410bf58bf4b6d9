//! Pay period window generation.
//!
//! The attendance grid does not follow calendar months. A window starts on
//! a fixed day of the selected month (the 16th) and runs for a fixed number
//! of days (31), spilling into the following month and sometimes the one
//! after that.

use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::config::{DEFAULT_PERIOD_LENGTH_DAYS, DEFAULT_PERIOD_START_DAY};
use crate::models::{DateRangeEntry, PayPeriod};

/// Resolves the first day of the window for a month index and year.
///
/// Month indexes above 11 roll into later years and a start day past the
/// end of the month rolls into the next month, the way a calendar that
/// normalizes overflowing fields would.
///
/// Returns `None` only when the date falls outside chrono's supported range.
pub fn period_start(month_index: u32, year: i32, start_day: u32) -> Option<NaiveDate> {
    let year = year.checked_add((month_index / 12) as i32)?;
    let month = month_index % 12 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(u64::from(start_day.saturating_sub(1))))
}

/// Generates the standard 31-day window starting on the 16th.
///
/// # Arguments
///
/// * `month_index` - Zero-based month (0 = January)
/// * `year` - Calendar year
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::generate_date_range;
///
/// let range = generate_date_range(0, 2024);
/// assert_eq!(range.len(), 31);
/// assert_eq!(range[0].key, "2024-01-16");
/// assert_eq!(range[30].key, "2024-02-15");
/// ```
pub fn generate_date_range(month_index: u32, year: i32) -> Vec<DateRangeEntry> {
    generate_date_range_with(
        month_index,
        year,
        DEFAULT_PERIOD_START_DAY,
        DEFAULT_PERIOD_LENGTH_DAYS,
    )
}

/// Generates a window of `length_days` consecutive days starting on
/// `start_day` of the selected month.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::generate_date_range_with;
///
/// // Start on the 1st for a calendar-month style window.
/// let range = generate_date_range_with(1, 2024, 1, 29);
/// assert_eq!(range.last().unwrap().key, "2024-02-29");
/// ```
pub fn generate_date_range_with(
    month_index: u32,
    year: i32,
    start_day: u32,
    length_days: u32,
) -> Vec<DateRangeEntry> {
    let Some(start) = period_start(month_index, year, start_day) else {
        warn!(month_index, year, "Pay period start is out of range");
        return Vec::new();
    };

    start
        .iter_days()
        .take(length_days as usize)
        .map(DateRangeEntry::new)
        .collect()
}

/// Returns the inclusive window for the selected month.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::pay_period_for;
/// use chrono::NaiveDate;
///
/// let period = pay_period_for(11, 2023, 16, 31).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2023, 12, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// ```
pub fn pay_period_for(
    month_index: u32,
    year: i32,
    start_day: u32,
    length_days: u32,
) -> Option<PayPeriod> {
    let start_date = period_start(month_index, year, start_day)?;
    let end_date =
        start_date.checked_add_days(Days::new(u64::from(length_days.saturating_sub(1))))?;
    Some(PayPeriod {
        start_date,
        end_date,
    })
}
