//! Attendance status model.
//!
//! A calendar cell is either unmarked, marked present ("N") or flagged
//! ("F"). Operators cycle a cell through those three states one click at a
//! time.

use serde::{Deserialize, Serialize};

/// The status recorded for one employee on one day.
///
/// Serializes to the single-letter codes shown in the calendar grid, with
/// the unmarked state serialized as an empty string.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::AttendanceStatus;
///
/// let status = AttendanceStatus::Unmarked;
/// assert_eq!(status.next(), AttendanceStatus::Normal);
/// assert_eq!(status.next().next(), AttendanceStatus::Flagged);
/// assert_eq!(status.next().next().next(), AttendanceStatus::Unmarked);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Nothing recorded for the day.
    #[default]
    #[serde(rename = "")]
    Unmarked,
    /// Present, a normal working day.
    #[serde(rename = "N")]
    Normal,
    /// Flagged as an absence.
    #[serde(rename = "F")]
    Flagged,
}

impl AttendanceStatus {
    /// Returns the status that follows this one in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            AttendanceStatus::Unmarked => AttendanceStatus::Normal,
            AttendanceStatus::Normal => AttendanceStatus::Flagged,
            AttendanceStatus::Flagged => AttendanceStatus::Unmarked,
        }
    }

    /// Returns the stored code: `"N"`, `"F"` or `""`.
    pub fn code(self) -> &'static str {
        match self {
            AttendanceStatus::Unmarked => "",
            AttendanceStatus::Normal => "N",
            AttendanceStatus::Flagged => "F",
        }
    }

    /// Returns true if the day counts as worked.
    pub fn is_work_day(self) -> bool {
        self == AttendanceStatus::Normal
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Unmarked => write!(f, "-"),
            other => write!(f, "{}", other.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unmarked() {
        assert_eq!(AttendanceStatus::default(), AttendanceStatus::Unmarked);
    }

    #[test]
    fn test_next_cycles_through_three_states() {
        assert_eq!(AttendanceStatus::Unmarked.next(), AttendanceStatus::Normal);
        assert_eq!(AttendanceStatus::Normal.next(), AttendanceStatus::Flagged);
        assert_eq!(AttendanceStatus::Flagged.next(), AttendanceStatus::Unmarked);
    }

    #[test]
    fn test_only_normal_is_work_day() {
        assert!(AttendanceStatus::Normal.is_work_day());
        assert!(!AttendanceStatus::Flagged.is_work_day());
        assert!(!AttendanceStatus::Unmarked.is_work_day());
    }

    #[test]
    fn test_serialization_uses_codes() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Normal).unwrap(),
            "\"N\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Flagged).unwrap(),
            "\"F\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Unmarked).unwrap(),
            "\"\""
        );
    }

    #[test]
    fn test_deserialize_empty_string_is_unmarked() {
        let status: AttendanceStatus = serde_json::from_str("\"\"").unwrap();
        assert_eq!(status, AttendanceStatus::Unmarked);
    }

    #[test]
    fn test_display_uses_dash_for_unmarked() {
        assert_eq!(AttendanceStatus::Unmarked.to_string(), "-");
        assert_eq!(AttendanceStatus::Normal.to_string(), "N");
        assert_eq!(AttendanceStatus::Flagged.to_string(), "F");
    }
}
