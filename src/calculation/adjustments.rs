//! Allowance and deduction totals.
//!
//! Both catalogs are summed the same way: only enabled buckets count, and
//! an amount that is not a number contributes zero and raises a warning.
//! A sum that leaves the `Decimal` range saturates and raises a warning.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AdjustmentBucket, AdjustmentKind, AuditStep, AuditWarning};

/// Warning code for an enabled bucket whose amount text is not a number.
pub const NON_NUMERIC_AMOUNT: &str = "NON_NUMERIC_AMOUNT";

/// Warning code for a sum that overflowed and was saturated.
pub const AMOUNT_OVERFLOW: &str = "AMOUNT_OVERFLOW";

/// Builds the warning recorded when a sum saturates.
pub(crate) fn overflow_warning(what: &str, saturated: Decimal) -> AuditWarning {
    warn!(what, %saturated, "Amount overflowed, saturating");
    AuditWarning {
        code: AMOUNT_OVERFLOW.to_string(),
        message: format!("{} overflowed; capped at {}", what, saturated),
        severity: "high".to_string(),
    }
}

/// The result of totalling one catalog, including the audit step.
#[derive(Debug, Clone)]
pub struct AdjustmentTotalResult {
    /// Sum of enabled bucket amounts.
    pub total: Decimal,
    /// One warning per enabled bucket with a non-numeric amount.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this total.
    pub audit_step: AuditStep,
}

/// Sums the enabled buckets of one catalog.
///
/// # Arguments
///
/// * `rule_id` - `"allowances"` or `"deductions"`, used in the audit trail
/// * `buckets` - The employee's buckets for the catalog
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::total_adjustments;
/// use attendance_payroll::models::{AdjustmentBucket, AllowanceKind, AmountInput};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let mut buckets = BTreeMap::new();
/// let bucket = |enabled, amount| AdjustmentBucket { enabled, amount: AmountInput::from(amount) };
/// buckets.insert(AllowanceKind::Meal, bucket(true, "120"));
/// buckets.insert(AllowanceKind::Transport, bucket(false, "80"));
///
/// let result = total_adjustments("allowances", &buckets, 4);
/// assert_eq!(result.total, Decimal::from(120));
/// ```
pub fn total_adjustments<K: AdjustmentKind>(
    rule_id: &str,
    buckets: &BTreeMap<K, AdjustmentBucket>,
    step_number: u32,
) -> AdjustmentTotalResult {
    let mut total = Decimal::ZERO;
    let mut warnings = Vec::new();
    let mut applied = serde_json::Map::new();

    for (kind, bucket) in buckets.iter().filter(|(_, b)| b.enabled) {
        if !bucket.amount.is_numeric() {
            warn!(
                bucket = kind.name(),
                amount = bucket.amount.as_str(),
                "Non-numeric amount, using its leading number"
            );
            warnings.push(AuditWarning {
                code: NON_NUMERIC_AMOUNT.to_string(),
                message: format!(
                    "{} '{}' amount '{}' is not a number; counted as {}",
                    rule_id,
                    kind.name(),
                    bucket.amount.as_str(),
                    bucket.amount.value().normalize()
                ),
                severity: "low".to_string(),
            });
        }

        let amount = bucket.contribution();
        total = match total.checked_add(amount) {
            Some(sum) => sum,
            None => {
                let saturated = total.saturating_add(amount);
                warnings.push(overflow_warning(
                    &format!("{} total at '{}'", rule_id, kind.name()),
                    saturated,
                ));
                saturated
            }
        };
        applied.insert(
            kind.name().to_string(),
            serde_json::Value::String(amount.normalize().to_string()),
        );
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: format!("Total {}", rule_id),
        input: serde_json::json!({
            "buckets": buckets.len(),
            "enabled": applied.len()
        }),
        output: serde_json::json!({
            "applied": applied,
            "total": total.normalize().to_string()
        }),
        reasoning: if applied.is_empty() {
            format!("No {} enabled", rule_id)
        } else {
            format!(
                "{} enabled {} totalling {}",
                applied.len(),
                rule_id,
                total.normalize()
            )
        },
    };

    AdjustmentTotalResult {
        total,
        warnings,
        audit_step,
    }
}
