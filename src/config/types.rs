//! Configuration types for attendance and payroll.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every structure has a
//! `Default` carrying the standard constants, so the engine runs without
//! any configuration directory at all.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The standard wage paid per work day.
pub const DEFAULT_DAILY_WAGE: i64 = 600;

/// The standard number of consecutive work days that earns a bonus day.
pub const DEFAULT_BONUS_STREAK_DAYS: u32 = 7;

/// The standard first day of a pay period window.
pub const DEFAULT_PERIOD_START_DAY: u32 = 16;

/// The standard number of days in a pay period window.
pub const DEFAULT_PERIOD_LENGTH_DAYS: u32 = 31;

/// The standard admin secret.
pub const DEFAULT_ADMIN_SECRET: &str = "admin";

/// The standard currency label shown after amounts.
pub const DEFAULT_CURRENCY_LABEL: &str = "บาท";

/// Wage settings from payroll.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WageConfig {
    /// The wage paid per work or bonus day.
    pub daily_wage: Decimal,
    /// Consecutive "N" days needed for one bonus day.
    pub bonus_streak_days: u32,
    /// Label printed after money amounts.
    pub currency_label: String,
}

impl Default for WageConfig {
    fn default() -> Self {
        Self {
            daily_wage: Decimal::from(DEFAULT_DAILY_WAGE),
            bonus_streak_days: DEFAULT_BONUS_STREAK_DAYS,
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
        }
    }
}

/// Window settings from pay_period.yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayPeriodConfig {
    /// Day of month the window starts on.
    pub start_day: u32,
    /// Number of days in the window.
    pub length_days: u32,
}

impl Default for PayPeriodConfig {
    fn default() -> Self {
        Self {
            start_day: DEFAULT_PERIOD_START_DAY,
            length_days: DEFAULT_PERIOD_LENGTH_DAYS,
        }
    }
}

/// Operator gate settings from admin.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// The shared plaintext secret.
    pub secret: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_ADMIN_SECRET.to_string(),
        }
    }
}

/// The complete configuration of the engine.
///
/// # Example
///
/// ```
/// use attendance_payroll::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.wage.daily_wage, Decimal::from(600));
/// assert_eq!(config.wage.bonus_streak_days, 7);
/// assert_eq!(config.pay_period.start_day, 16);
/// assert_eq!(config.pay_period.length_days, 31);
/// assert_eq!(config.admin.secret, "admin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Wage settings.
    pub wage: WageConfig,
    /// Pay period window settings.
    pub pay_period: PayPeriodConfig,
    /// Admin gate settings.
    pub admin: AdminConfig,
}

impl PayrollConfig {
    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first field that is out of range.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.wage.daily_wage.is_sign_negative() {
            return Err(invalid("daily_wage", "must not be negative"));
        }
        if self.wage.bonus_streak_days == 0 {
            return Err(invalid("bonus_streak_days", "must be at least 1"));
        }
        if !(1..=31).contains(&self.pay_period.start_day) {
            return Err(invalid("start_day", "must be between 1 and 31"));
        }
        if self.pay_period.length_days == 0 {
            return Err(invalid("length_days", "must be at least 1"));
        }
        if self.admin.secret.is_empty() {
            return Err(invalid("secret", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> PayrollError {
    PayrollError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
