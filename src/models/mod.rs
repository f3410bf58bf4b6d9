//! Core data models for the attendance and payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustment;
mod attendance;
mod calculation_result;
mod employee;
mod pay_period;

pub use adjustment::{
    AdjustmentBucket, AdjustmentKind, AllowanceKind, AmountInput, BucketChange, DeductionKind,
};
pub use attendance::AttendanceStatus;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, SalaryBreakdown};
pub use employee::{Employee, EmployeeField, NEW_EMPLOYEE_FIRST_NAME};
pub use pay_period::{DateRangeEntry, PayPeriod};
