//! Base salary calculation.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning};

use super::adjustments::overflow_warning;

/// The result of the base salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseSalaryResult {
    /// (work days + bonus days) × daily wage.
    pub base_salary: Decimal,
    /// Set when the product overflowed and was saturated.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays every work day and every bonus day at the daily wage.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::calculate_base_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_base_salary(31, 4, Decimal::from(600), 2);
/// assert_eq!(result.base_salary, Decimal::from(21000));
/// ```
pub fn calculate_base_salary(
    work_days: u32,
    bonus_days: u32,
    daily_wage: Decimal,
    step_number: u32,
) -> BaseSalaryResult {
    let paid_days = work_days + bonus_days;
    let mut warnings = Vec::new();
    let base_salary = match Decimal::from(paid_days).checked_mul(daily_wage) {
        Some(product) => product,
        None => {
            let saturated = Decimal::from(paid_days).saturating_mul(daily_wage);
            warnings.push(overflow_warning("base salary", saturated));
            saturated
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary".to_string(),
        rule_name: "Base Salary".to_string(),
        input: serde_json::json!({
            "work_days": work_days,
            "bonus_days": bonus_days,
            "daily_wage": daily_wage.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid_days": paid_days,
            "base_salary": base_salary.normalize().to_string()
        }),
        reasoning: format!(
            "({} work + {} bonus) days × {} = {}",
            work_days,
            bonus_days,
            daily_wage.normalize(),
            base_salary.normalize()
        ),
    };

    BaseSalaryResult {
        base_salary,
        warnings,
        audit_step,
    }
}
