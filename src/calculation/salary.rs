//! Salary summary calculation.
//!
//! Combines the attendance count, base salary and both adjustment totals
//! into one [`SalaryBreakdown`]. The calculation reads nothing but the
//! employee record and the configuration, and never fails.

use tracing::debug;

use crate::config::PayrollConfig;
use crate::models::{AuditStep, AuditTrace, Employee, SalaryBreakdown};

use super::adjustments::overflow_warning;
use super::{calculate_base_salary, count_attendance, total_adjustments};

/// Calculates the salary summary for one employee.
///
/// # Steps
///
/// 1. Count "N" days and completed streaks over the recorded attendance
/// 2. Base salary = (work days + bonus days) × daily wage
/// 3. Sum enabled allowances
/// 4. Sum enabled deductions
/// 5. Net salary = base + allowances − deductions (may be negative)
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::calculate_salary;
/// use attendance_payroll::config::PayrollConfig;
/// use attendance_payroll::models::{AttendanceStatus, Employee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::blank("003");
/// employee.attendance.insert(
///     NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
///     AttendanceStatus::Normal,
/// );
///
/// let breakdown = calculate_salary(&employee, &PayrollConfig::default());
/// assert_eq!(breakdown.work_days, 1);
/// assert_eq!(breakdown.base_salary, Decimal::from(600));
/// assert_eq!(breakdown.net_salary, Decimal::from(600));
/// ```
pub fn calculate_salary(employee: &Employee, config: &PayrollConfig) -> SalaryBreakdown {
    let mut trace = AuditTrace::default();

    let count = count_attendance(
        &employee.attendance,
        config.wage.bonus_streak_days,
        trace.next_step_number(),
    );
    trace.steps.push(count.audit_step);

    let base = calculate_base_salary(
        count.work_days,
        count.bonus_days,
        config.wage.daily_wage,
        trace.next_step_number(),
    );
    trace.steps.push(base.audit_step);
    trace.warnings.extend(base.warnings);

    let allowances = total_adjustments(
        "allowances",
        &employee.allowances,
        trace.next_step_number(),
    );
    trace.steps.push(allowances.audit_step);
    trace.warnings.extend(allowances.warnings);

    let deductions = total_adjustments(
        "deductions",
        &employee.deductions,
        trace.next_step_number(),
    );
    trace.steps.push(deductions.audit_step);
    trace.warnings.extend(deductions.warnings);

    let net_salary = match base
        .base_salary
        .checked_add(allowances.total)
        .and_then(|gross| gross.checked_sub(deductions.total))
    {
        Some(net) => net,
        None => {
            let saturated = base
                .base_salary
                .saturating_add(allowances.total)
                .saturating_sub(deductions.total);
            trace.warnings.push(overflow_warning("net salary", saturated));
            saturated
        }
    };

    trace.steps.push(AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "base_salary": base.base_salary.normalize().to_string(),
            "total_allowances": allowances.total.normalize().to_string(),
            "total_deductions": deductions.total.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} - {} = {}",
            base.base_salary.normalize(),
            allowances.total.normalize(),
            deductions.total.normalize(),
            net_salary.normalize()
        ),
    });

    debug!(
        employee_id = %employee.id,
        work_days = count.work_days,
        bonus_days = count.bonus_days,
        net_salary = %net_salary,
        "Calculated salary"
    );

    SalaryBreakdown {
        employee_id: employee.id.clone(),
        work_days: count.work_days,
        bonus_days: count.bonus_days,
        daily_wage: config.wage.daily_wage,
        base_salary: base.base_salary,
        total_allowances: allowances.total,
        total_deductions: deductions.total,
        net_salary,
        audit_trace: trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AdjustmentBucket, AllowanceKind, AmountInput, AttendanceStatus, DeductionKind,
    };
    use chrono::{Days, NaiveDate};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bucket(enabled: bool, amount: &str) -> AdjustmentBucket {
        AdjustmentBucket {
            enabled,
            amount: AmountInput::from(amount),
        }
    }

    fn employee_with_normal_days(days: u64) -> Employee {
        let start = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        let mut employee = Employee::blank("001");
        for i in 0..days {
            employee
                .attendance
                .insert(start + Days::new(i), AttendanceStatus::Normal);
        }
        employee
    }

    /// SC-001: full window, no adjustments
    #[test]
    fn test_full_window_salary() {
        let breakdown = calculate_salary(&employee_with_normal_days(31), &PayrollConfig::default());
        assert_eq!(breakdown.work_days, 31);
        assert_eq!(breakdown.bonus_days, 4);
        assert_eq!(breakdown.base_salary, dec("21000"));
        assert_eq!(breakdown.net_salary, breakdown.base_salary);
    }

    /// SC-002: nothing recorded
    #[test]
    fn test_no_attendance_pays_nothing() {
        let breakdown = calculate_salary(&Employee::blank("001"), &PayrollConfig::default());
        assert_eq!(breakdown.work_days, 0);
        assert_eq!(breakdown.bonus_days, 0);
        assert_eq!(breakdown.base_salary, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, Decimal::ZERO);
    }

    /// SC-003: allowances and deductions
    #[test]
    fn test_adjustments_applied_to_net() {
        let mut employee = employee_with_normal_days(10);
        employee
            .allowances
            .insert(AllowanceKind::Meal, bucket(true, "1200"));
        employee
            .allowances
            .insert(AllowanceKind::Transport, bucket(false, "900"));
        employee
            .deductions
            .insert(DeductionKind::SocialSecurity, bucket(true, "375.50"));

        let breakdown = calculate_salary(&employee, &PayrollConfig::default());
        assert_eq!(breakdown.base_salary, dec("6600"));
        assert_eq!(breakdown.total_allowances, dec("1200"));
        assert_eq!(breakdown.total_deductions, dec("375.50"));
        assert_eq!(breakdown.net_salary, dec("7424.50"));
    }

    /// SC-004: deductions larger than pay
    #[test]
    fn test_net_salary_can_be_negative() {
        let mut employee = Employee::blank("001");
        employee
            .deductions
            .insert(DeductionKind::Advance, bucket(true, "1000"));

        let breakdown = calculate_salary(&employee, &PayrollConfig::default());
        assert_eq!(breakdown.net_salary, dec("-1000"));
    }

    /// SC-005: seeded employees have no buckets at all
    #[test]
    fn test_employee_without_buckets() {
        let mut employee = Employee::new("002", "สมหญิง", "รักงาน");
        employee.attendance.insert(
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            AttendanceStatus::Normal,
        );
        let breakdown = calculate_salary(&employee, &PayrollConfig::default());
        assert_eq!(breakdown.total_allowances, Decimal::ZERO);
        assert_eq!(breakdown.total_deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_salary, dec("600"));
    }

    #[test]
    fn test_configured_wage_and_streak() {
        let mut config = PayrollConfig::default();
        config.wage.daily_wage = dec("500");
        config.wage.bonus_streak_days = 5;

        let breakdown = calculate_salary(&employee_with_normal_days(10), &config);
        assert_eq!(breakdown.bonus_days, 2);
        assert_eq!(breakdown.daily_wage, dec("500"));
        assert_eq!(breakdown.base_salary, dec("6000"));
    }

    #[test]
    fn test_audit_trace_has_five_ordered_steps() {
        let breakdown = calculate_salary(&employee_with_normal_days(3), &PayrollConfig::default());
        let rule_ids: Vec<&str> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "attendance_count",
                "base_salary",
                "allowances",
                "deductions",
                "net_salary"
            ]
        );
        for (i, step) in breakdown.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_warnings_collected_from_both_catalogs() {
        let mut employee = Employee::blank("001");
        employee
            .allowances
            .insert(AllowanceKind::Holiday, bucket(true, "x"));
        employee
            .deductions
            .insert(DeductionKind::Equipment, bucket(true, "y"));

        let breakdown = calculate_salary(&employee, &PayrollConfig::default());
        assert_eq!(breakdown.audit_trace.warnings.len(), 2);
        assert_eq!(breakdown.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_allowances_do_not_panic() {
        const MANY: &str = "70000000000000000000000000000";
        let mut employee = employee_with_normal_days(31);
        employee
            .allowances
            .insert(AllowanceKind::Holiday, bucket(true, MANY));
        employee
            .allowances
            .insert(AllowanceKind::Meal, bucket(true, MANY));

        let breakdown = calculate_salary(&employee, &PayrollConfig::default());
        assert_eq!(breakdown.total_allowances, Decimal::MAX);
        assert_eq!(breakdown.net_salary, Decimal::MAX);
        let codes: Vec<&str> = breakdown
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["AMOUNT_OVERFLOW", "AMOUNT_OVERFLOW"]);
    }

    #[test]
    fn test_overflowing_net_with_deductions_saturates() {
        let mut employee = employee_with_normal_days(1);
        employee
            .allowances
            .insert(
                AllowanceKind::Holiday,
                bucket(true, "-79228162514264337593543950335"),
            );
        employee
            .deductions
            .insert(DeductionKind::Advance, bucket(true, "1000"));

        let breakdown = calculate_salary(&employee, &PayrollConfig::default());
        assert_eq!(breakdown.net_salary, Decimal::MIN);
        assert_eq!(breakdown.audit_trace.warnings.len(), 1);
        assert_eq!(breakdown.audit_trace.warnings[0].code, "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let employee = employee_with_normal_days(12);
        let config = PayrollConfig::default();
        assert_eq!(
            calculate_salary(&employee, &config),
            calculate_salary(&employee, &config)
        );
    }
}
