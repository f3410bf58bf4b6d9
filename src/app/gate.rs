//! Operator mode gate.
//!
//! A single shared secret unlocks operator mode for the rest of the
//! session. The secret is compared as plain text; there is no lockout.

use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};

/// Tracks whether the session is in operator (elevated) mode.
///
/// # Example
///
/// ```
/// use attendance_payroll::app::AdminGate;
/// use attendance_payroll::error::PayrollError;
///
/// let mut gate = AdminGate::new("admin");
/// assert_eq!(gate.login("guess"), Err(PayrollError::InvalidAdminSecret));
/// assert!(!gate.is_elevated());
///
/// gate.login("admin").unwrap();
/// assert!(gate.is_elevated());
/// ```
#[derive(Clone)]
pub struct AdminGate {
    secret: String,
    elevated: bool,
}

impl AdminGate {
    /// Creates a locked gate for `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            elevated: false,
        }
    }

    /// Returns true while operator mode is unlocked.
    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Unlocks operator mode if `input` equals the secret.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAdminSecret` on mismatch; the mode is left as it was.
    pub fn login(&mut self, input: &str) -> PayrollResult<()> {
        if input == self.secret {
            self.elevated = true;
            info!("Operator mode enabled");
            Ok(())
        } else {
            warn!("Rejected admin secret");
            Err(PayrollError::InvalidAdminSecret)
        }
    }

    /// Leaves operator mode. Returns false if it was not active.
    pub fn logout(&mut self) -> bool {
        let was_elevated = self.elevated;
        self.elevated = false;
        if was_elevated {
            info!("Operator mode disabled");
        }
        was_elevated
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("secret", &"<redacted>")
            .field("elevated", &self.elevated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gate_is_locked() {
        assert!(!AdminGate::new("admin").is_elevated());
    }

    #[test]
    fn test_correct_secret_elevates() {
        let mut gate = AdminGate::new("admin");
        assert_eq!(gate.login("admin"), Ok(()));
        assert!(gate.is_elevated());
    }

    #[test]
    fn test_wrong_secret_fails_and_stays_locked() {
        let mut gate = AdminGate::new("admin");
        assert_eq!(gate.login("Admin"), Err(PayrollError::InvalidAdminSecret));
        assert_eq!(gate.login(""), Err(PayrollError::InvalidAdminSecret));
        assert_eq!(gate.login("admin "), Err(PayrollError::InvalidAdminSecret));
        assert!(!gate.is_elevated());
    }

    #[test]
    fn test_wrong_secret_keeps_existing_elevation() {
        let mut gate = AdminGate::new("admin");
        gate.login("admin").unwrap();
        assert!(gate.login("nope").is_err());
        assert!(gate.is_elevated());
    }

    #[test]
    fn test_repeated_attempts_are_not_locked_out() {
        let mut gate = AdminGate::new("admin");
        for _ in 0..10 {
            assert!(gate.login("wrong").is_err());
        }
        assert!(gate.login("admin").is_ok());
    }

    #[test]
    fn test_logout() {
        let mut gate = AdminGate::new("admin");
        assert!(!gate.logout());
        gate.login("admin").unwrap();
        assert!(gate.logout());
        assert!(!gate.is_elevated());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let gate = AdminGate::new("hunter2");
        let debug = format!("{:?}", gate);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("elevated: false"));
    }
}
