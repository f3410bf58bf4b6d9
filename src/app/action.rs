//! Interaction messages for the attendance view.
//!
//! Every control on the screen maps to one [`Action`]. Actions are plain
//! data so a session can be scripted or replayed from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AllowanceKind, BucketChange, DeductionKind, EmployeeField};

/// One user interaction.
///
/// # Example
///
/// ```
/// use attendance_payroll::app::Action;
/// use chrono::NaiveDate;
///
/// let action: Action = serde_json::from_str(
///     r#"{"type": "toggle_attendance", "id": "001", "date": "2024-01-16"}"#,
/// ).unwrap();
///
/// assert_eq!(
///     action,
///     Action::ToggleAttendance {
///         id: "001".to_string(),
///         date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Pick the pay period month (0 = January).
    SelectMonth {
        /// Zero-based month index.
        month: u32,
    },
    /// Pick the pay period year.
    SelectYear {
        /// Calendar year.
        year: i32,
    },
    /// Filter the visible employees.
    Search {
        /// Substring to match against names and ids.
        term: String,
    },
    /// Try to unlock operator mode.
    Login {
        /// The secret as typed.
        secret: String,
    },
    /// Leave operator mode.
    Logout,
    /// Append a blank employee.
    AddEmployee,
    /// Delete an employee.
    RemoveEmployee {
        /// The employee id.
        id: String,
    },
    /// Replace a name or id.
    UpdateField {
        /// The employee id.
        id: String,
        /// Which field to replace.
        field: EmployeeField,
        /// The new text.
        value: String,
    },
    /// Cycle one attendance cell.
    ToggleAttendance {
        /// The employee id.
        id: String,
        /// The day of the cell.
        date: NaiveDate,
    },
    /// Edit one allowance bucket.
    UpdateAllowance {
        /// The employee id.
        id: String,
        /// Which allowance.
        kind: AllowanceKind,
        /// The switch or amount edit.
        change: BucketChange,
    },
    /// Edit one deduction bucket.
    UpdateDeduction {
        /// The employee id.
        id: String,
        /// Which deduction.
        kind: DeductionKind,
        /// The switch or amount edit.
        change: BucketChange,
    },
    /// Open the edit panel for an employee, or close it if already open.
    ToggleEditing {
        /// The employee id.
        id: String,
    },
    /// Close the edit panel.
    StopEditing,
    /// Show the salary summary popup.
    OpenSummary {
        /// The employee id.
        id: String,
    },
    /// Hide the salary summary popup.
    CloseSummary,
}

impl Action {
    /// Returns true if the action changes roster data and therefore needs
    /// operator mode.
    pub fn is_gated(&self) -> bool {
        matches!(
            self,
            Action::AddEmployee
                | Action::RemoveEmployee { .. }
                | Action::UpdateField { .. }
                | Action::ToggleAttendance { .. }
                | Action::UpdateAllowance { .. }
                | Action::UpdateDeduction { .. }
                | Action::ToggleEditing { .. }
        )
    }
}
