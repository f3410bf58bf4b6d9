//! Work day and bonus streak counting.
//!
//! This module walks an employee's recorded attendance in date order,
//! counting "N" days and awarding one bonus day for every run of
//! consecutive "N" entries that reaches the streak length.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AttendanceStatus, AuditStep};

/// The result of counting attendance, including the audit step.
#[derive(Debug, Clone)]
pub struct AttendanceCountResult {
    /// Entries marked "N".
    pub work_days: u32,
    /// Completed streaks.
    pub bonus_days: u32,
    /// The audit step recording this count.
    pub audit_step: AuditStep,
}

/// Counts work days and bonus days over recorded attendance.
///
/// Every "N" entry increments the work-day total and the streak counter.
/// Any other recorded status, including an explicitly cleared cell, resets
/// the streak counter. When the counter reaches exactly `streak_days` a
/// bonus day is awarded and the counter starts again from zero, so streaks
/// never overlap.
///
/// Only recorded entries are walked: a day that was never touched does not
/// interrupt a streak.
///
/// # Arguments
///
/// * `attendance` - The employee's attendance, keyed by date
/// * `streak_days` - Consecutive "N" entries needed for one bonus day
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::count_attendance;
/// use attendance_payroll::models::AttendanceStatus;
/// use chrono::{Days, NaiveDate};
/// use std::collections::BTreeMap;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
/// let attendance: BTreeMap<_, _> = (0..31)
///     .map(|i| (start + Days::new(i), AttendanceStatus::Normal))
///     .collect();
///
/// let result = count_attendance(&attendance, 7, 1);
/// assert_eq!(result.work_days, 31);
/// assert_eq!(result.bonus_days, 4);
/// ```
pub fn count_attendance(
    attendance: &BTreeMap<NaiveDate, AttendanceStatus>,
    streak_days: u32,
    step_number: u32,
) -> AttendanceCountResult {
    let mut work_days = 0u32;
    let mut bonus_days = 0u32;
    let mut consecutive = 0u32;
    let mut streak_ends = Vec::new();

    for (date, status) in attendance {
        if status.is_work_day() {
            work_days += 1;
            consecutive += 1;
            if consecutive == streak_days {
                bonus_days += 1;
                consecutive = 0;
                streak_ends.push(date.to_string());
            }
        } else {
            consecutive = 0;
        }
    }

    let flagged_days = attendance
        .values()
        .filter(|s| **s == AttendanceStatus::Flagged)
        .count();

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_count".to_string(),
        rule_name: "Work Day and Bonus Streak Count".to_string(),
        input: serde_json::json!({
            "recorded_entries": attendance.len(),
            "streak_days": streak_days
        }),
        output: serde_json::json!({
            "work_days": work_days,
            "flagged_days": flagged_days,
            "bonus_days": bonus_days,
            "streak_end_dates": streak_ends
        }),
        reasoning: format!(
            "{} day(s) marked N; {} complete {}-day streak(s) earn {} bonus day(s)",
            work_days, bonus_days, streak_days, bonus_days
        ),
    };

    AttendanceCountResult {
        work_days,
        bonus_days,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).unwrap() + Days::new(offset)
    }

    /// Builds attendance from a pattern string: N, F, '.' for an explicit
    /// unmarked cell and ' ' for a day with no entry.
    fn attendance(pattern: &str) -> BTreeMap<NaiveDate, AttendanceStatus> {
        pattern
            .chars()
            .enumerate()
            .filter_map(|(i, c)| {
                let status = match c {
                    'N' => AttendanceStatus::Normal,
                    'F' => AttendanceStatus::Flagged,
                    '.' => AttendanceStatus::Unmarked,
                    _ => return None,
                };
                Some((day(i as u64), status))
            })
            .collect()
    }

    /// AC-001: empty attendance
    #[test]
    fn test_empty_attendance_counts_nothing() {
        let result = count_attendance(&BTreeMap::new(), 7, 1);
        assert_eq!(result.work_days, 0);
        assert_eq!(result.bonus_days, 0);
    }

    /// AC-002: full 31-day window
    #[test]
    fn test_full_window_earns_four_bonus_days() {
        let result = count_attendance(&attendance(&"N".repeat(31)), 7, 1);
        assert_eq!(result.work_days, 31);
        assert_eq!(result.bonus_days, 4);
    }

    /// AC-003: exactly seven days
    #[test]
    fn test_seven_days_earn_one_bonus() {
        let result = count_attendance(&attendance("NNNNNNN"), 7, 1);
        assert_eq!(result.work_days, 7);
        assert_eq!(result.bonus_days, 1);
    }

    /// AC-004: six days are not enough
    #[test]
    fn test_six_days_earn_nothing() {
        let result = count_attendance(&attendance("NNNNNN"), 7, 1);
        assert_eq!(result.work_days, 6);
        assert_eq!(result.bonus_days, 0);
    }

    /// AC-005: flagged day breaks the streak
    #[test]
    fn test_flagged_day_resets_streak() {
        let result = count_attendance(&attendance("NNNNNNFNNNNNN"), 7, 1);
        assert_eq!(result.work_days, 12);
        assert_eq!(result.bonus_days, 0);
    }

    /// AC-006: explicitly cleared day breaks the streak
    #[test]
    fn test_cleared_day_resets_streak() {
        let result = count_attendance(&attendance("NNN.NNNN"), 7, 1);
        assert_eq!(result.work_days, 7);
        assert_eq!(result.bonus_days, 0);
    }

    /// AC-007: a day with no entry does not break the streak
    #[test]
    fn test_missing_day_does_not_reset_streak() {
        let result = count_attendance(&attendance("NNN NNNN"), 7, 1);
        assert_eq!(result.work_days, 7);
        assert_eq!(result.bonus_days, 1);
    }

    /// AC-008: streaks do not overlap
    #[test]
    fn test_thirteen_days_earn_one_bonus() {
        let result = count_attendance(&attendance(&"N".repeat(13)), 7, 1);
        assert_eq!(result.bonus_days, 1);
        let result = count_attendance(&attendance(&"N".repeat(14)), 7, 1);
        assert_eq!(result.bonus_days, 2);
    }

    #[test]
    fn test_custom_streak_length() {
        let result = count_attendance(&attendance(&"N".repeat(10)), 5, 1);
        assert_eq!(result.bonus_days, 2);
    }

    #[test]
    fn test_audit_step_records_counts() {
        let result = count_attendance(&attendance("NNNNNNNF"), 7, 3);
        let step = &result.audit_step;
        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "attendance_count");
        assert_eq!(step.input["recorded_entries"], 8);
        assert_eq!(step.output["work_days"], 7);
        assert_eq!(step.output["flagged_days"], 1);
        assert_eq!(step.output["bonus_days"], 1);
        assert_eq!(step.output["streak_end_dates"][0], "2024-01-22");
    }
}
