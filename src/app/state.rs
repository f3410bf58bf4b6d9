//! View state for the attendance screen.
//!
//! [`AttendanceApp`] owns the roster, the operator gate and the selections
//! the screen is showing. Every control is a method here, and [`Action`]
//! messages dispatch onto the same methods through [`AttendanceApp::apply`].

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, warn};

use crate::calculation::{calculate_salary, generate_date_range_with, pay_period_for};
use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::{
    AllowanceKind, BucketChange, DateRangeEntry, DeductionKind, Employee, EmployeeField, PayPeriod,
};
use crate::roster::Roster;

use super::action::Action;
use super::gate::AdminGate;
use super::view::{CalendarCell, SalarySummaryView, calendar_cells};

/// The state behind the attendance screen.
///
/// # Example
///
/// ```
/// use attendance_payroll::app::AttendanceApp;
/// use attendance_payroll::config::PayrollConfig;
///
/// let mut app = AttendanceApp::with_period(PayrollConfig::default(), 0, 2024);
/// assert_eq!(app.date_range().len(), 31);
///
/// // Roster edits are ignored until operator mode is unlocked.
/// assert!(app.add_employee().is_none());
/// app.login("admin").unwrap();
/// assert_eq!(app.add_employee().as_deref(), Some("003"));
/// ```
#[derive(Debug, Clone)]
pub struct AttendanceApp {
    config: PayrollConfig,
    gate: AdminGate,
    roster: Roster,
    selected_month: u32,
    selected_year: i32,
    search_term: String,
    editing_employee: Option<String>,
    summary_employee: Option<String>,
}

impl AttendanceApp {
    /// Creates the screen on today's month with the seeded roster.
    pub fn new(config: PayrollConfig) -> Self {
        let today = Local::now().date_naive();
        Self::with_period(config, today.month0(), today.year())
    }

    /// Creates the screen on a fixed month with the seeded roster.
    pub fn with_period(config: PayrollConfig, month_index: u32, year: i32) -> Self {
        let gate = AdminGate::new(config.admin.secret.clone());
        Self {
            config,
            gate,
            roster: Roster::seeded(),
            selected_month: month_index,
            selected_year: year,
            search_term: String::new(),
            editing_employee: None,
            summary_employee: None,
        }
    }

    /// Replaces the roster.
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the selected zero-based month.
    pub fn selected_month(&self) -> u32 {
        self.selected_month
    }

    /// Returns the selected year.
    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// Returns the current search text.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the id whose edit panel is open.
    pub fn editing_employee(&self) -> Option<&str> {
        self.editing_employee.as_deref()
    }

    /// Returns the id whose summary popup is open.
    pub fn summary_employee(&self) -> Option<&str> {
        self.summary_employee.as_deref()
    }

    /// Selects the pay period month (0 = January).
    pub fn select_month(&mut self, month_index: u32) {
        self.selected_month = month_index;
    }

    /// Selects the pay period year.
    pub fn select_year(&mut self, year: i32) {
        self.selected_year = year;
    }

    /// Sets the search filter. An empty term shows everyone.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Returns the employees matching the search term, in roster order.
    pub fn visible_employees(&self) -> Vec<&Employee> {
        self.roster.search(&self.search_term)
    }

    /// Returns the window for the selected month.
    pub fn date_range(&self) -> Vec<DateRangeEntry> {
        generate_date_range_with(
            self.selected_month,
            self.selected_year,
            self.config.pay_period.start_day,
            self.config.pay_period.length_days,
        )
    }

    /// Returns the first and last day of the selected window.
    pub fn pay_period(&self) -> Option<PayPeriod> {
        pay_period_for(
            self.selected_month,
            self.selected_year,
            self.config.pay_period.start_day,
            self.config.pay_period.length_days,
        )
    }

    /// Tries to unlock operator mode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAdminSecret` if `secret` is wrong.
    pub fn login(&mut self, secret: &str) -> PayrollResult<()> {
        self.gate.login(secret)
    }

    /// Leaves operator mode and closes the edit panel.
    pub fn logout(&mut self) -> bool {
        self.editing_employee = None;
        self.gate.logout()
    }

    /// Returns true while operator mode is unlocked.
    pub fn is_elevated(&self) -> bool {
        self.gate.is_elevated()
    }

    /// Appends a blank employee and returns its id.
    pub fn add_employee(&mut self) -> Option<String> {
        if !self.allow("add_employee") {
            return None;
        }
        Some(self.roster.add_employee())
    }

    /// Removes an employee, closing any panel open for it.
    pub fn remove_employee(&mut self, id: &str) -> bool {
        if !self.allow("remove_employee") {
            return false;
        }
        let removed = self.roster.remove_employee(id);
        if removed {
            if self.editing_employee.as_deref() == Some(id) {
                self.editing_employee = None;
            }
            if self.summary_employee.as_deref() == Some(id) {
                self.summary_employee = None;
            }
        }
        removed
    }

    /// Replaces a name or id. Open panels follow a renamed id.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployeeId` if the new id is already taken.
    pub fn update_employee_field(
        &mut self,
        id: &str,
        field: EmployeeField,
        value: impl Into<String>,
    ) -> PayrollResult<bool> {
        if !self.allow("update_employee_field") {
            return Ok(false);
        }
        let value = value.into();
        let updated = self.roster.update_field(id, field, value.clone())?;
        if updated && field == EmployeeField::Id {
            for open in [&mut self.editing_employee, &mut self.summary_employee] {
                if open.as_deref() == Some(id) {
                    *open = Some(value.clone());
                }
            }
        }
        Ok(updated)
    }

    /// Cycles one attendance cell.
    pub fn toggle_attendance(&mut self, id: &str, date: NaiveDate) -> bool {
        if !self.allow("toggle_attendance") {
            return false;
        }
        self.roster.toggle_attendance(id, date).is_some()
    }

    /// Edits one allowance bucket.
    pub fn update_allowance(
        &mut self,
        id: &str,
        kind: AllowanceKind,
        change: &BucketChange,
    ) -> bool {
        if !self.allow("update_allowance") {
            return false;
        }
        self.roster.update_allowance(id, kind, change)
    }

    /// Edits one deduction bucket.
    pub fn update_deduction(
        &mut self,
        id: &str,
        kind: DeductionKind,
        change: &BucketChange,
    ) -> bool {
        if !self.allow("update_deduction") {
            return false;
        }
        self.roster.update_deduction(id, kind, change)
    }

    /// Opens the edit panel for `id`, or closes it if it is already open.
    pub fn start_editing(&mut self, id: &str) -> bool {
        if !self.allow("start_editing") {
            return false;
        }
        if self.editing_employee.as_deref() == Some(id) {
            self.editing_employee = None;
            return true;
        }
        if !self.roster.contains(id) {
            return false;
        }
        self.editing_employee = Some(id.to_string());
        true
    }

    /// Closes the edit panel.
    pub fn stop_editing(&mut self) -> bool {
        self.editing_employee.take().is_some()
    }

    /// Opens the summary popup for an existing employee.
    pub fn open_summary(&mut self, id: &str) -> bool {
        if !self.roster.contains(id) {
            return false;
        }
        self.summary_employee = Some(id.to_string());
        true
    }

    /// Closes the summary popup.
    pub fn close_summary(&mut self) -> bool {
        self.summary_employee.take().is_some()
    }

    /// Returns the open summary popup.
    pub fn summary(&self) -> Option<SalarySummaryView> {
        let id = self.summary_employee.as_deref()?;
        self.summary_for(id)
    }

    /// Builds the summary popup for any employee.
    pub fn summary_for(&self, id: &str) -> Option<SalarySummaryView> {
        let employee = self.roster.get(id)?;
        let breakdown = calculate_salary(employee, &self.config);
        Some(SalarySummaryView::new(
            employee,
            breakdown,
            self.config.wage.bonus_streak_days,
            self.config.wage.currency_label.clone(),
        ))
    }

    /// Returns the attendance cells of `id` for the selected window.
    pub fn calendar_grid(&self, id: &str) -> Option<Vec<CalendarCell>> {
        let employee = self.roster.get(id)?;
        Some(calendar_cells(employee, &self.date_range()))
    }

    /// Applies one interaction and returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAdminSecret` for a failed login and
    /// `DuplicateEmployeeId` for a colliding id edit.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_payroll::app::{Action, AttendanceApp};
    /// use attendance_payroll::config::PayrollConfig;
    ///
    /// let mut app = AttendanceApp::with_period(PayrollConfig::default(), 0, 2024);
    /// let script = r#"[
    ///     {"type": "login", "secret": "admin"},
    ///     {"type": "toggle_attendance", "id": "001", "date": "2024-01-16"}
    /// ]"#;
    /// let actions: Vec<Action> = serde_json::from_str(script).unwrap();
    /// for action in actions {
    ///     assert!(app.apply(action).unwrap());
    /// }
    /// ```
    pub fn apply(&mut self, action: Action) -> PayrollResult<bool> {
        debug!(?action, "Applying action");
        if action.is_gated() && !self.is_elevated() {
            warn!(?action, "Ignored roster edit outside operator mode");
            return Ok(false);
        }
        let changed = match action {
            Action::SelectMonth { month } => {
                let changed = self.selected_month != month;
                self.select_month(month);
                changed
            }
            Action::SelectYear { year } => {
                let changed = self.selected_year != year;
                self.select_year(year);
                changed
            }
            Action::Search { term } => {
                let changed = self.search_term != term;
                self.set_search_term(term);
                changed
            }
            Action::Login { secret } => {
                let was_elevated = self.is_elevated();
                self.login(&secret)?;
                !was_elevated
            }
            Action::Logout => self.logout(),
            Action::AddEmployee => self.add_employee().is_some(),
            Action::RemoveEmployee { id } => self.remove_employee(&id),
            Action::UpdateField { id, field, value } => {
                self.update_employee_field(&id, field, value)?
            }
            Action::ToggleAttendance { id, date } => self.toggle_attendance(&id, date),
            Action::UpdateAllowance { id, kind, change } => {
                self.update_allowance(&id, kind, &change)
            }
            Action::UpdateDeduction { id, kind, change } => {
                self.update_deduction(&id, kind, &change)
            }
            Action::ToggleEditing { id } => self.start_editing(&id),
            Action::StopEditing => self.stop_editing(),
            Action::OpenSummary { id } => self.open_summary(&id),
            Action::CloseSummary => self.close_summary(),
        };
        Ok(changed)
    }

    fn allow(&self, operation: &str) -> bool {
        let elevated = self.gate.is_elevated();
        if !elevated {
            warn!(operation, "Ignored roster edit outside operator mode");
        }
        elevated
    }
}
