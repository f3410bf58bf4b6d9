//! Configuration loading and management for the attendance and payroll engine.
//!
//! This module provides functionality to load the wage, pay period and admin
//! settings from YAML files, with compiled-in defaults for every value.
//!
//! # Example
//!
//! ```no_run
//! use attendance_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Bonus streak: {} days", config.config().wage.bonus_streak_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdminConfig, DEFAULT_ADMIN_SECRET, DEFAULT_BONUS_STREAK_DAYS, DEFAULT_CURRENCY_LABEL,
    DEFAULT_DAILY_WAGE, DEFAULT_PERIOD_LENGTH_DAYS, DEFAULT_PERIOD_START_DAY, PayPeriodConfig,
    PayrollConfig, WageConfig,
};
