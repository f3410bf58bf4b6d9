//! Employee attendance tracking and payroll summaries.
//!
//! This crate records daily attendance for a small roster over a 31-day pay
//! period window starting on the 16th, and turns it into a salary summary:
//! work days, consecutive-attendance bonus days, base salary, optional
//! allowances and deductions, and the net total.
//!
//! # Example
//!
//! ```
//! use attendance_payroll::app::AttendanceApp;
//! use attendance_payroll::config::PayrollConfig;
//!
//! let mut app = AttendanceApp::with_period(PayrollConfig::default(), 0, 2024);
//! app.login("admin").unwrap();
//! for entry in app.date_range() {
//!     app.toggle_attendance("001", entry.date);
//! }
//!
//! let summary = app.summary_for("001").unwrap();
//! assert_eq!(summary.breakdown.work_days, 31);
//! assert_eq!(summary.breakdown.bonus_days, 4);
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
