//! Presentation helpers for the attendance screen.
//!
//! This module turns roster data and salary breakdowns into the strings and
//! cells the screen shows: the calendar grid, month and year selectors and
//! the salary summary popup.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{AttendanceStatus, DateRangeEntry, Employee, SalaryBreakdown};

/// Thai month names, indexed by zero-based month.
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Returns the Thai name of a zero-based month index.
pub fn month_name(month_index: u32) -> Option<&'static str> {
    THAI_MONTHS.get(month_index as usize).copied()
}

/// Returns the years offered by the year selector around `selected`: five
/// before it and four after, clipped at the ends of the `i32` range.
///
/// ```
/// use attendance_payroll::app::year_options;
///
/// let years = year_options(2024);
/// assert_eq!(years.first(), Some(&2019));
/// assert_eq!(years.last(), Some(&2028));
/// ```
pub fn year_options(selected: i32) -> Vec<i32> {
    (selected.saturating_sub(5)..selected.saturating_add(5)).collect()
}

/// Formats an amount with comma-grouped thousands.
///
/// At most three fraction digits are shown and trailing zeros are dropped.
///
/// ```
/// use attendance_payroll::app::format_grouped;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_grouped(Decimal::from(21000)), "21,000");
/// assert_eq!(format_grouped(Decimal::new(123456789, 2)), "1,234,567.89");
/// assert_eq!(format_grouped(Decimal::from(-1500)), "-1,500");
/// ```
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }

    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// One cell of an employee's attendance grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// Day of month shown above the cell.
    pub day: u32,
    /// The cell's date.
    pub date: NaiveDate,
    /// `YYYY-MM-DD` key.
    pub key: String,
    /// Recorded status.
    pub status: AttendanceStatus,
    /// Text shown in the cell: "N", "F" or "-".
    pub label: String,
}

/// Builds the grid cells of `employee` for a generated window.
pub fn calendar_cells(employee: &Employee, entries: &[DateRangeEntry]) -> Vec<CalendarCell> {
    entries
        .iter()
        .map(|entry| {
            let status = employee.status_on(entry.date);
            CalendarCell {
                day: entry.day,
                date: entry.date,
                key: entry.key.clone(),
                status,
                label: status.to_string(),
            }
        })
        .collect()
}

/// The salary summary popup for one employee.
///
/// `Display` renders the popup text, one labelled figure per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySummaryView {
    /// The employee id.
    pub employee_id: String,
    /// First and last name.
    pub full_name: String,
    /// Streak length shown in the bonus label.
    pub streak_days: u32,
    /// Label printed after money amounts.
    pub currency_label: String,
    /// The calculated figures.
    pub breakdown: SalaryBreakdown,
}

impl SalarySummaryView {
    /// Builds the popup for `employee` from its breakdown.
    pub fn new(
        employee: &Employee,
        breakdown: SalaryBreakdown,
        streak_days: u32,
        currency_label: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee.id.clone(),
            full_name: employee.full_name(),
            streak_days,
            currency_label: currency_label.into(),
            breakdown,
        }
    }

    /// Returns the labelled figures in display order.
    pub fn lines(&self) -> Vec<(String, String)> {
        let b = &self.breakdown;
        let money = |value: Decimal| format!("{} {}", format_grouped(value), self.currency_label);
        vec![
            ("วันที่ทำงาน".to_string(), format!("{} วัน", b.work_days)),
            (
                format!("โบนัส {} วันติด", self.streak_days),
                format!("{} วัน", b.bonus_days),
            ),
            ("เงินเดือนพื้นฐาน".to_string(), money(b.base_salary)),
            (
                "รายได้เพิ่มเติม".to_string(),
                format!("+{}", money(b.total_allowances)),
            ),
            (
                "รายจ่าย".to_string(),
                format!("-{}", money(b.total_deductions)),
            ),
            ("รวมทั้งหมด".to_string(), money(b.net_salary)),
        ]
    }
}

impl std::fmt::Display for SalarySummaryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "สรุปรายได้")?;
        writeln!(f, "{}", self.full_name)?;
        writeln!(f, "รหัส: {}", self.employee_id)?;
        for (label, value) in self.lines() {
            writeln!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}
