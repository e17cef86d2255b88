//! Fatal error taxonomy for a scheduling run.
//!
//! Soft conditions (no waiting boards, a filament group with no compatible
//! printer) are not errors — they are reported through the run outcome and
//! the tracing diagnostics. Only conditions that make the run's output
//! meaningless abort it.

use thiserror::Error;

/// Errors that abort a scheduling run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A relative offset could not be mapped onto the calendar.
    ///
    /// Raised when the plan anchor plus the offset is outside the
    /// representable timestamp range.
    #[error("offset {offset_hours}h from plan anchor is not a representable timestamp")]
    TimestampOverflow { offset_hours: f64 },

    /// A duration or offset was NaN or infinite.
    #[error("non-finite time value: {value_hours}")]
    NonFiniteTime { value_hours: f64 },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScheduleError::TimestampOverflow { offset_hours: 1e15 };
        assert!(err.to_string().contains("not a representable timestamp"));

        let err = ScheduleError::NonFiniteTime {
            value_hours: f64::NAN,
        };
        assert!(err.to_string().contains("non-finite"));
    }
}
