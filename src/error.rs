//! Error types for the attendance and payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Most interactions never fail: an unmatched employee id or a gated action
//! outside operator mode is a silent no-op. Errors are reserved for
//! configuration loading, the admin secret check and id collisions.

use thiserror::Error;

/// The alert text shown to the operator when the admin secret is wrong.
pub const INVALID_SECRET_ALERT: &str = "รหัสผ่านไม่ถูกต้อง";

/// The main error type for the attendance and payroll engine.
///
/// # Example
///
/// ```
/// use attendance_payroll::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The operator entered the wrong admin secret.
    #[error("Invalid admin secret")]
    InvalidAdminSecret,

    /// Renaming an employee would collide with another employee's id.
    #[error("Employee id already in use: {id}")]
    DuplicateEmployeeId {
        /// The id that is already taken.
        id: String,
    },

    /// An allowance or deduction name is not part of the fixed catalog.
    #[error("Unknown allowance or deduction: {name}")]
    UnknownAdjustment {
        /// The name that could not be resolved.
        name: String,
    },
}

impl PayrollError {
    /// Returns the message to surface to the operator for this error.
    ///
    /// Only the admin secret failure has a dedicated alert; everything else
    /// falls back to the `Display` text.
    ///
    /// ```
    /// use attendance_payroll::error::{PayrollError, INVALID_SECRET_ALERT};
    ///
    /// assert_eq!(PayrollError::InvalidAdminSecret.user_message(), INVALID_SECRET_ALERT);
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            PayrollError::InvalidAdminSecret => INVALID_SECRET_ALERT.to_string(),
            other => other.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
