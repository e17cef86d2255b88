//! Production plan model.
//!
//! A plan is one scheduling run: it anchors relative load offsets to the
//! calendar and receives the run's resulting makespan. Plans are created
//! externally; the scheduler never mutates one — the caller writes the
//! makespan from the run outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A production plan (one scheduling run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Label of the algorithm used to build the plan.
    pub algorithm: String,
    /// Calendar anchor: relative offset 0h maps to this instant.
    pub anchor: DateTime<Utc>,
    /// Resulting makespan (hours). `None` until a run succeeds.
    pub makespan_hours: Option<f64>,
}

impl Plan {
    /// Creates a plan anchored at the given instant.
    pub fn new(id: impl Into<String>, anchor: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            algorithm: "LPT".into(),
            anchor,
            makespan_hours: None,
        }
    }

    /// Sets the plan name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the algorithm label.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_plan_builder() {
        let anchor = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let plan = Plan::new("PL1", anchor).with_name("March batch");

        assert_eq!(plan.id, "PL1");
        assert_eq!(plan.name, "March batch");
        assert_eq!(plan.algorithm, "LPT");
        assert_eq!(plan.anchor, anchor);
        assert!(plan.makespan_hours.is_none());
    }
}
