//! Plan quality metrics (KPIs).
//!
//! Computes performance indicators from a completed run outcome.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest printer finish time (hours) |
//! | Avg Utilization | Mean printer busyness over the makespan |
//! | Boards Scheduled | Assignments emitted |
//! | Boards Skipped | Waiting boards left in skipped groups |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use crate::models::PlanOutcome;

/// Performance indicators for one scheduling run.
///
/// All time values are in hours.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Makespan: maximum final printer load (hours). `None` for no-op runs.
    pub makespan_hours: Option<f64>,
    /// Per-printer busy hours, keyed by printer ID.
    pub busy_hours_by_printer: BTreeMap<String, f64>,
    /// Per-printer utilization (busy / makespan, 0.0..1.0).
    pub utilization_by_printer: BTreeMap<String, f64>,
    /// Average printer utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Number of boards assigned.
    pub boards_scheduled: usize,
    /// Number of waiting boards in groups without a compatible printer.
    pub boards_skipped: usize,
}

impl PlanKpi {
    /// Computes KPIs from a run outcome.
    ///
    /// Utilization uses the overall makespan as the horizon, so a printer
    /// busy for the whole run scores 1.0.
    pub fn calculate(outcome: &PlanOutcome) -> Self {
        let busy_hours_by_printer = outcome.all_printer_loads();
        let boards_scheduled = outcome.task_count();
        let boards_skipped = outcome.skipped.iter().map(|s| s.board_count).sum();

        let utilization_by_printer: BTreeMap<String, f64> = match outcome.makespan_hours {
            Some(horizon) if horizon > 0.0 => busy_hours_by_printer
                .iter()
                .map(|(id, &busy)| (id.clone(), busy / horizon))
                .collect(),
            _ => BTreeMap::new(),
        };

        let avg_utilization = if utilization_by_printer.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_printer.values().sum();
            sum / utilization_by_printer.len() as f64
        };

        Self {
            makespan_hours: outcome.makespan_hours,
            busy_hours_by_printer,
            utilization_by_printer,
            avg_utilization,
            boards_scheduled,
            boards_skipped,
        }
    }

    /// Whether the run assigned every waiting board it saw.
    pub fn is_complete(&self) -> bool {
        self.boards_skipped == 0
    }
}
