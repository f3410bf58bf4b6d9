//! The in-memory employee roster.
//!
//! Every write replaces the targeted record with an edited copy; nothing
//! else in the roster is touched. Lookups by an id that matches nobody are
//! silent no-ops.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AdjustmentBucket, AdjustmentKind, AllowanceKind, AttendanceStatus, BucketChange,
    DeductionKind, Employee, EmployeeField,
};

/// An ordered collection of employees with unique ids.
///
/// # Example
///
/// ```
/// use attendance_payroll::roster::Roster;
///
/// let mut roster = Roster::seeded();
/// assert_eq!(roster.len(), 2);
///
/// let id = roster.add_employee();
/// assert_eq!(id, "003");
/// assert!(roster.remove_employee(&id));
/// assert_eq!(roster.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the starting roster: two employees without buckets.
    pub fn seeded() -> Self {
        Self {
            employees: vec![
                Employee::new("001", "สมชาย", "ใจดี"),
                Employee::new("002", "สมหญิง", "รักงาน"),
            ],
        }
    }

    /// Creates a roster from existing records.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployeeId` if two records share an id.
    pub fn from_employees(employees: Vec<Employee>) -> PayrollResult<Self> {
        for (i, employee) in employees.iter().enumerate() {
            if employees[..i].iter().any(|e| e.id == employee.id) {
                return Err(PayrollError::DuplicateEmployeeId {
                    id: employee.id.clone(),
                });
            }
        }
        Ok(Self { employees })
    }

    /// Returns every employee in roster order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Returns true if an employee has this id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns employees whose first name, last name or id contains `term`,
    /// in roster order. An empty term matches everyone.
    pub fn search(&self, term: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.matches_search(term))
            .collect()
    }

    /// Returns the id the next added employee will get.
    ///
    /// The id is the roster size plus one, zero-padded to three digits. If
    /// that id is already taken (after a removal, say) the counter moves on
    /// to the next free one.
    pub fn next_id(&self) -> String {
        let mut n = self.employees.len() + 1;
        loop {
            let candidate = format!("{:03}", n);
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Appends a blank employee and returns its id.
    pub fn add_employee(&mut self) -> String {
        let id = self.next_id();
        self.employees.push(Employee::blank(id.clone()));
        debug!(employee_id = %id, "Added employee");
        id
    }

    /// Removes the employee with this id. Returns false if there was none.
    pub fn remove_employee(&mut self, id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        let removed = self.employees.len() != before;
        if removed {
            debug!(employee_id = %id, "Removed employee");
        }
        removed
    }

    /// Replaces one text field on the employee with this id.
    ///
    /// Returns `Ok(false)` if no employee has the id.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployeeId` when changing the id to one that
    /// another employee already uses.
    pub fn update_field(
        &mut self,
        id: &str,
        field: EmployeeField,
        value: impl Into<String>,
    ) -> PayrollResult<bool> {
        let value = value.into();

        if field == EmployeeField::Id && value != id && self.contains(&value) {
            warn!(employee_id = %id, new_id = %value, "Rejected duplicate employee id");
            return Err(PayrollError::DuplicateEmployeeId { id: value });
        }

        let updated = self.replace(id, |employee| {
            let mut edited = employee.clone();
            match field {
                EmployeeField::FirstName => edited.first_name = value.clone(),
                EmployeeField::LastName => edited.last_name = value.clone(),
                EmployeeField::Id => edited.id = value.clone(),
            }
            edited
        });

        if updated {
            debug!(employee_id = %id, ?field, "Updated employee field");
        }
        Ok(updated)
    }

    /// Advances one attendance cell to its next status and returns the new
    /// status, or `None` if no employee has the id.
    ///
    /// The cell is always written back, so a cell cycled to unmarked stays
    /// recorded as unmarked.
    pub fn toggle_attendance(&mut self, id: &str, date: NaiveDate) -> Option<AttendanceStatus> {
        let next = self.get(id)?.status_on(date).next();
        self.replace(id, |employee| {
            let mut edited = employee.clone();
            edited.attendance.insert(date, next);
            edited
        });
        debug!(employee_id = %id, %date, status = next.code(), "Toggled attendance");
        Some(next)
    }

    /// Applies `change` to one allowance bucket. Returns false if no
    /// employee has the id.
    pub fn update_allowance(
        &mut self,
        id: &str,
        kind: AllowanceKind,
        change: &BucketChange,
    ) -> bool {
        let updated = self.replace(id, |employee| {
            let mut edited = employee.clone();
            apply_change(&mut edited.allowances, kind, change);
            edited
        });
        if updated {
            debug!(employee_id = %id, bucket = kind.name(), ?change, "Updated allowance");
        }
        updated
    }

    /// Applies `change` to one deduction bucket. Returns false if no
    /// employee has the id.
    pub fn update_deduction(
        &mut self,
        id: &str,
        kind: DeductionKind,
        change: &BucketChange,
    ) -> bool {
        let updated = self.replace(id, |employee| {
            let mut edited = employee.clone();
            apply_change(&mut edited.deductions, kind, change);
            edited
        });
        if updated {
            debug!(employee_id = %id, bucket = kind.name(), ?change, "Updated deduction");
        }
        updated
    }

    /// Replaces the record with this id by `edit(record)`.
    fn replace(&mut self, id: &str, edit: impl Fn(&Employee) -> Employee) -> bool {
        match self.employees.iter().position(|e| e.id == id) {
            Some(index) => {
                let edited = edit(&self.employees[index]);
                self.employees[index] = edited;
                true
            }
            None => false,
        }
    }
}

/// Rewrites one bucket, creating it from the default first if missing.
fn apply_change<K: AdjustmentKind>(
    buckets: &mut BTreeMap<K, AdjustmentBucket>,
    kind: K,
    change: &BucketChange,
) {
    let current = buckets.get(&kind).cloned().unwrap_or_default();
    buckets.insert(kind, current.with_change(change));
}
