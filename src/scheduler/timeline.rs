//! Calendar mapping for relative schedule offsets.
//!
//! The assignment engine works in hours relative to the plan anchor; this
//! module converts those offsets into absolute timestamps. Fractional hours
//! are mapped at millisecond resolution. Conversion failures (non-finite
//! values, timestamps outside the representable range) abort the run.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, ScheduleError};

/// Maps relative offsets (hours) onto the calendar.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    anchor: DateTime<Utc>,
}

impl Timeline {
    /// Creates a timeline anchored at the given instant.
    pub fn new(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    /// The instant that offset 0h maps to.
    #[inline]
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// Absolute timestamp at `offset_hours` from the anchor.
    pub fn at_offset(&self, offset_hours: f64) -> Result<DateTime<Utc>> {
        let span = Self::span(offset_hours)?;
        self.anchor
            .checked_add_signed(span)
            .ok_or(ScheduleError::TimestampOverflow { offset_hours })
    }

    /// Exact calendar span for a number of hours, at millisecond resolution.
    ///
    /// Adding the returned span to a task's start yields an end timestamp
    /// whose distance from the start equals the duration exactly.
    pub fn span(hours: f64) -> Result<Duration> {
        if !hours.is_finite() {
            return Err(ScheduleError::NonFiniteTime { value_hours: hours });
        }
        let millis = hours * 3_600_000.0;
        if millis >= i64::MAX as f64 || millis <= i64::MIN as f64 {
            return Err(ScheduleError::TimestampOverflow {
                offset_hours: hours,
            });
        }
        Duration::try_milliseconds(millis.round() as i64).ok_or(
            ScheduleError::TimestampOverflow {
                offset_hours: hours,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_at_offset_whole_hours() {
        let timeline = Timeline::new(anchor());
        let ts = timeline.at_offset(5.0).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 13, 0, 0).unwrap());
    }

    #[test]
    fn test_at_offset_fractional_hours() {
        let timeline = Timeline::new(anchor());
        let ts = timeline.at_offset(2.5).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_at_offset_zero() {
        let timeline = Timeline::new(anchor());
        assert_eq!(timeline.at_offset(0.0).unwrap(), anchor());
    }

    #[test]
    fn test_span_preserves_duration() {
        let start = Timeline::new(anchor()).at_offset(3.25).unwrap();
        let span = Timeline::span(4.5).unwrap();
        let end = start + span;
        assert_eq!(end - start, span);
        assert_eq!(span, Duration::minutes(270));
    }

    #[test]
    fn test_overflow_is_fatal() {
        let timeline = Timeline::new(anchor());
        let err = timeline.at_offset(1e15).unwrap_err();
        assert!(matches!(err, ScheduleError::TimestampOverflow { .. }));
    }

    #[test]
    fn test_non_finite_is_fatal() {
        let err = Timeline::span(f64::NAN).unwrap_err();
        assert!(matches!(err, ScheduleError::NonFiniteTime { .. }));

        let err = Timeline::span(f64::INFINITY).unwrap_err();
        assert!(matches!(err, ScheduleError::NonFiniteTime { .. }));
    }
}
