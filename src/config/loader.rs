//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::{AdminConfig, PayPeriodConfig, PayrollConfig, WageConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/standard/
/// ├── payroll.yaml     # Daily wage, bonus streak, currency label
/// ├── pay_period.yaml  # Window start day and length
/// └── admin.yaml       # Shared admin secret
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Daily wage: {}", loader.config().wage.daily_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - Any value is out of range (`InvalidConfig`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), attendance_payroll::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let wage = Self::load_yaml::<WageConfig>(&path.join("payroll.yaml"))?;
        let pay_period = Self::load_yaml::<PayPeriodConfig>(&path.join("pay_period.yaml"))?;
        let admin = Self::load_yaml::<AdminConfig>(&path.join("admin.yaml"))?;

        let config = PayrollConfig {
            wage,
            pay_period,
            admin,
        };
        config.validate()?;

        info!(
            path = %path.display(),
            daily_wage = %config.wage.daily_wage,
            bonus_streak_days = config.wage.bonus_streak_days,
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an in-memory configuration, validating it first.
    pub fn from_config(config: PayrollConfig) -> PayrollResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
