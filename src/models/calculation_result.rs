//! Salary calculation result models.
//!
//! This module contains the [`SalaryBreakdown`] returned by the payroll
//! calculator and the audit structures that record how each figure was
//! reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag input that was accepted but degraded, such as an amount
/// that was not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the step number the next recorded step should use.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Returns the step with the given rule id, if recorded.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The salary summary for one employee.
///
/// All money values are in the configured currency. `net_salary` has no
/// floor and goes negative when deductions exceed pay.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::{AuditTrace, SalaryBreakdown};
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     employee_id: "001".to_string(),
///     work_days: 8,
///     bonus_days: 1,
///     daily_wage: Decimal::from(600),
///     base_salary: Decimal::from(5400),
///     total_allowances: Decimal::from(200),
///     total_deductions: Decimal::from(750),
///     net_salary: Decimal::from(4850),
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(breakdown.paid_days(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The employee the summary is for.
    pub employee_id: String,
    /// Days marked "N".
    pub work_days: u32,
    /// Bonus days earned from 7-day streaks.
    pub bonus_days: u32,
    /// The wage paid per work or bonus day.
    pub daily_wage: Decimal,
    /// (work days + bonus days) × daily wage.
    pub base_salary: Decimal,
    /// Sum of enabled allowances.
    pub total_allowances: Decimal,
    /// Sum of enabled deductions.
    pub total_deductions: Decimal,
    /// Base salary plus allowances minus deductions.
    pub net_salary: Decimal,
    /// How each figure was reached.
    pub audit_trace: AuditTrace,
}

impl SalaryBreakdown {
    /// Returns work days plus bonus days.
    pub fn paid_days(&self) -> u32 {
        self.work_days + self.bonus_days
    }
}
