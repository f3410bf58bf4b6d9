//! Employee model.
//!
//! This module defines the Employee record held by the roster: identity,
//! display names, the attendance calendar and the allowance/deduction
//! buckets that feed the salary summary.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AdjustmentBucket, AdjustmentKind, AllowanceKind, AttendanceStatus, DeductionKind};

/// The first name given to a freshly added employee.
pub const NEW_EMPLOYEE_FIRST_NAME: &str = "พนักงานใหม่";

/// A single editable text field on an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    /// The given name.
    FirstName,
    /// The family name.
    LastName,
    /// The employee code.
    Id,
}

/// Represents an employee on the roster.
///
/// Attendance is keyed by calendar date, so iterating it always walks the
/// days in order. Buckets may be missing entirely (the seeded employees
/// start without any) and a missing bucket counts as disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee code, e.g. `"001"`.
    pub id: String,
    /// The given name.
    pub first_name: String,
    /// The family name.
    pub last_name: String,
    /// Recorded status per day.
    #[serde(default)]
    pub attendance: BTreeMap<NaiveDate, AttendanceStatus>,
    /// Allowance buckets.
    #[serde(default)]
    pub allowances: BTreeMap<AllowanceKind, AdjustmentBucket>,
    /// Deduction buckets.
    #[serde(default)]
    pub deductions: BTreeMap<DeductionKind, AdjustmentBucket>,
}

impl Employee {
    /// Creates an employee with names but no attendance and no buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_payroll::models::Employee;
    ///
    /// let employee = Employee::new("001", "สมชาย", "ใจดี");
    /// assert_eq!(employee.full_name(), "สมชาย ใจดี");
    /// assert!(employee.allowances.is_empty());
    /// ```
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            attendance: BTreeMap::new(),
            allowances: BTreeMap::new(),
            deductions: BTreeMap::new(),
        }
    }

    /// Creates the blank record used by "add employee": placeholder first
    /// name and every bucket present, disabled, at zero.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            allowances: default_buckets(),
            deductions: default_buckets(),
            ..Self::new(id, NEW_EMPLOYEE_FIRST_NAME, "")
        }
    }

    /// Returns first and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the status recorded for `date`, unmarked if none.
    pub fn status_on(&self, date: NaiveDate) -> AttendanceStatus {
        self.attendance.get(&date).copied().unwrap_or_default()
    }

    /// Returns the value of one text field.
    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::Id => &self.id,
        }
    }

    /// Returns true if `term` occurs in the first name, last name or id.
    ///
    /// ```
    /// use attendance_payroll::models::Employee;
    ///
    /// let employee = Employee::new("002", "สมหญิง", "รักงาน");
    /// assert!(employee.matches_search("รัก"));
    /// assert!(employee.matches_search("02"));
    /// assert!(employee.matches_search(""));
    /// assert!(!employee.matches_search("สมชาย"));
    /// ```
    pub fn matches_search(&self, term: &str) -> bool {
        self.first_name.contains(term) || self.last_name.contains(term) || self.id.contains(term)
    }
}

/// Every bucket of a catalog, disabled at zero.
fn default_buckets<K: AdjustmentKind>() -> BTreeMap<K, AdjustmentBucket> {
    K::ALL
        .iter()
        .map(|kind| (*kind, AdjustmentBucket::default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AmountInput;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_blank_employee_has_all_buckets_disabled() {
        let employee = Employee::blank("003");
        assert_eq!(employee.id, "003");
        assert_eq!(employee.first_name, NEW_EMPLOYEE_FIRST_NAME);
        assert_eq!(employee.last_name, "");
        assert!(employee.attendance.is_empty());
        assert_eq!(employee.allowances.len(), 4);
        assert_eq!(employee.deductions.len(), 4);
        assert!(employee.allowances.values().all(|b| !b.enabled));
        assert!(employee.deductions.values().all(|b| !b.enabled));
    }

    #[test]
    fn test_status_on_missing_day_is_unmarked() {
        let employee = Employee::new("001", "A", "B");
        assert_eq!(
            employee.status_on(date(2024, 1, 16)),
            AttendanceStatus::Unmarked
        );
    }

    #[test]
    fn test_status_on_recorded_day() {
        let mut employee = Employee::new("001", "A", "B");
        employee
            .attendance
            .insert(date(2024, 1, 16), AttendanceStatus::Flagged);
        assert_eq!(
            employee.status_on(date(2024, 1, 16)),
            AttendanceStatus::Flagged
        );
    }

    #[test]
    fn test_field_accessor() {
        let employee = Employee::new("007", "James", "Bond");
        assert_eq!(employee.field(EmployeeField::FirstName), "James");
        assert_eq!(employee.field(EmployeeField::LastName), "Bond");
        assert_eq!(employee.field(EmployeeField::Id), "007");
    }

    #[test]
    fn test_deserialize_employee_without_buckets() {
        let json = r#"{
            "id": "001",
            "first_name": "สมชาย",
            "last_name": "ใจดี",
            "attendance": {"2024-01-16": "N", "2024-01-17": "F", "2024-01-18": ""}
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.attendance.len(), 3);
        assert_eq!(
            employee.status_on(date(2024, 1, 16)),
            AttendanceStatus::Normal
        );
        assert_eq!(
            employee.status_on(date(2024, 1, 18)),
            AttendanceStatus::Unmarked
        );
        assert!(employee.allowances.is_empty());
        assert!(employee.deductions.is_empty());
    }

    #[test]
    fn test_deserialize_employee_with_buckets() {
        let json = r#"{
            "id": "003",
            "first_name": "New",
            "last_name": "",
            "allowances": {"meal": {"enabled": true, "amount": 120}},
            "deductions": {"socialSecurity": {"enabled": true, "amount": "750"}}
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        let meal = &employee.allowances[&AllowanceKind::Meal];
        assert!(meal.enabled);
        assert_eq!(meal.amount, AmountInput::from("120"));
        assert!(employee.deductions[&DeductionKind::SocialSecurity].enabled);
    }

    #[test]
    fn test_attendance_keys_serialize_as_dates() {
        let mut employee = Employee::new("001", "A", "B");
        employee
            .attendance
            .insert(date(2024, 2, 15), AttendanceStatus::Normal);
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"2024-02-15\":\"N\""));
    }

    #[test]
    fn test_employee_field_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeField::FirstName).unwrap(),
            "\"first_name\""
        );
        assert_eq!(serde_json::to_string(&EmployeeField::Id).unwrap(), "\"id\"");
    }
}
