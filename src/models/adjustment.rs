//! Allowance and deduction models.
//!
//! Every employee carries a fixed catalog of allowance buckets (added to
//! pay) and deduction buckets (subtracted from pay). Each bucket has an
//! on/off switch and an operator-entered amount.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// Shared behaviour of the two fixed bucket catalogs.
pub trait AdjustmentKind: Copy + Ord + std::fmt::Debug + 'static {
    /// Every member of the catalog, in display order.
    const ALL: &'static [Self];

    /// The wire name of the bucket (e.g. `"social_security"`).
    fn name(self) -> &'static str;

    /// The Thai display label shown next to the checkbox.
    fn label(self) -> &'static str;
}

/// Additional income paid on top of the base salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceKind {
    /// Public holiday pay.
    Holiday,
    /// Meal allowance.
    Meal,
    /// Diligence allowance.
    Diligence,
    /// Travel allowance.
    Transport,
}

impl AdjustmentKind for AllowanceKind {
    const ALL: &'static [Self] = &[
        AllowanceKind::Holiday,
        AllowanceKind::Meal,
        AllowanceKind::Diligence,
        AllowanceKind::Transport,
    ];

    fn name(self) -> &'static str {
        match self {
            AllowanceKind::Holiday => "holiday",
            AllowanceKind::Meal => "meal",
            AllowanceKind::Diligence => "diligence",
            AllowanceKind::Transport => "transport",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AllowanceKind::Holiday => "วันหยุดนักขัตฤกษ์",
            AllowanceKind::Meal => "เบี้ยเลี้ยง",
            AllowanceKind::Diligence => "เบี้ยขยัน",
            AllowanceKind::Transport => "ค่าจราจร",
        }
    }
}

impl FromStr for AllowanceKind {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(s)
    }
}

/// Amounts withheld from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Social security contribution.
    #[serde(alias = "socialSecurity")]
    SocialSecurity,
    /// Life insurance premium.
    #[serde(alias = "lifeInsurance")]
    LifeInsurance,
    /// Salary advance repayment.
    Advance,
    /// Equipment withdrawal charge.
    Equipment,
}

impl AdjustmentKind for DeductionKind {
    const ALL: &'static [Self] = &[
        DeductionKind::SocialSecurity,
        DeductionKind::LifeInsurance,
        DeductionKind::Advance,
        DeductionKind::Equipment,
    ];

    fn name(self) -> &'static str {
        match self {
            DeductionKind::SocialSecurity => "social_security",
            DeductionKind::LifeInsurance => "life_insurance",
            DeductionKind::Advance => "advance",
            DeductionKind::Equipment => "equipment",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DeductionKind::SocialSecurity => "ค่าประกันสังคม",
            DeductionKind::LifeInsurance => "ค่าประกันชีวิต",
            DeductionKind::Advance => "ค่าเบิกล่วงหน้า",
            DeductionKind::Equipment => "ค่าเบิกอุปกรณ์",
        }
    }
}

impl FromStr for DeductionKind {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(s)
    }
}

/// Resolves a bucket by wire name, accepting camelCase spellings as well.
fn parse_kind<K: AdjustmentKind>(s: &str) -> Result<K, PayrollError> {
    let wanted: String = s
        .trim()
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect();

    K::ALL
        .iter()
        .copied()
        .find(|kind| kind.name().replace('_', "") == wanted)
        .ok_or_else(|| PayrollError::UnknownAdjustment {
            name: s.to_string(),
        })
}

/// The raw amount text entered for a bucket.
///
/// The text is kept exactly as typed. Its numeric value is read leniently:
/// the leading number is used (`"150abc"` is 150), an exponent is honoured
/// (`"1e3"` is 1000) and anything without a leading number is worth zero.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::AmountInput;
/// use rust_decimal::Decimal;
///
/// assert_eq!(AmountInput::from("250.50").value(), Decimal::new(25050, 2));
/// assert_eq!(AmountInput::from("abc").value(), Decimal::ZERO);
/// assert_eq!(AmountInput::from("").value(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawAmount", into = "String")]
pub struct AmountInput(String);

/// Accepts amounts written as JSON/YAML strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(Decimal),
}

impl From<RawAmount> for AmountInput {
    fn from(raw: RawAmount) -> Self {
        match raw {
            RawAmount::Text(text) => AmountInput(text),
            RawAmount::Number(number) => AmountInput::from(number),
        }
    }
}

impl From<AmountInput> for String {
    fn from(amount: AmountInput) -> Self {
        amount.0
    }
}

impl From<&str> for AmountInput {
    fn from(text: &str) -> Self {
        AmountInput(text.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(text: String) -> Self {
        AmountInput(text)
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput(value.normalize().to_string())
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        AmountInput("0".to_string())
    }
}

impl AmountInput {
    /// Returns the text exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value, degrading to zero when there is none.
    pub fn value(&self) -> Decimal {
        scan_number(self.0.trim_start())
            .map(|(value, _)| value)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the whole text is a number, or blank.
    pub fn is_numeric(&self) -> bool {
        let trimmed = self.0.trim();
        trimmed.is_empty()
            || scan_number(trimmed).is_some_and(|(_, consumed)| consumed == trimmed.len())
    }
}

/// Parses the longest `[+-]digits[.digits][e[+-]digits]` prefix of `text`.
///
/// Returns the value and the number of bytes consumed. An exponent marker
/// without digits is not part of the number.
fn scan_number(text: &str) -> Option<(Decimal, usize)> {
    let bytes = text.as_bytes();
    let (negative, mut end) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mantissa_start = end;
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    let mantissa = text[mantissa_start..end].trim_end_matches('.');
    let mantissa = if mantissa.starts_with('.') {
        format!("0{mantissa}")
    } else {
        mantissa.to_string()
    };

    let value = match exponent_len(&bytes[end..]) {
        Some(len) => {
            let exponent = text[end + 1..end + len].trim_start_matches('+');
            end += len;
            match Decimal::from_scientific(&format!("{mantissa}e{exponent}")) {
                Ok(value) => value,
                // Too small to represent.
                Err(_) if exponent.starts_with('-') => Decimal::ZERO,
                Err(_) => return None,
            }
        }
        None => Decimal::from_str(&mantissa).ok()?,
    };

    Some((if negative { -value } else { value }, end))
}

/// Length of a complete `e[+-]digits` suffix at the start of `bytes`.
fn exponent_len(bytes: &[u8]) -> Option<usize> {
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return None;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes
        .get(1 + sign..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then_some(1 + sign + digits)
}

/// One allowance or deduction switch with its amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentBucket {
    /// Whether the bucket counts towards the salary.
    #[serde(default)]
    pub enabled: bool,
    /// The operator-entered amount.
    #[serde(default)]
    pub amount: AmountInput,
}

impl AdjustmentBucket {
    /// Returns the amount this bucket contributes: its value when enabled,
    /// otherwise zero.
    pub fn contribution(&self) -> Decimal {
        if self.enabled {
            self.amount.value()
        } else {
            Decimal::ZERO
        }
    }

    /// Returns a copy of this bucket with `change` applied.
    pub fn with_change(&self, change: &BucketChange) -> Self {
        match change {
            BucketChange::Enabled(enabled) => AdjustmentBucket {
                enabled: *enabled,
                amount: self.amount.clone(),
            },
            BucketChange::Amount(amount) => AdjustmentBucket {
                enabled: self.enabled,
                amount: amount.clone(),
            },
        }
    }
}

/// A single edit to one bucket: either its switch or its amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketChange {
    /// Turn the bucket on or off.
    Enabled(bool),
    /// Replace the amount text.
    Amount(AmountInput),
}
