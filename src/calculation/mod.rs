//! Calculation logic for the attendance and payroll engine.
//!
//! This module contains the pay period window generator and the salary
//! calculation: work day and bonus streak counting, base salary, allowance
//! and deduction totals, and the combined salary summary.

mod adjustments;
mod attendance_count;
mod base_salary;
mod date_range;
mod salary;

pub use adjustments::{
    AMOUNT_OVERFLOW, AdjustmentTotalResult, NON_NUMERIC_AMOUNT, total_adjustments,
};
pub use attendance_count::{AttendanceCountResult, count_attendance};
pub use base_salary::{BaseSalaryResult, calculate_base_salary};
pub use date_range::{generate_date_range, generate_date_range_with, pay_period_for, period_start};
pub use salary::calculate_salary;
