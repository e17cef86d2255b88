//! Scheduling run outcome.
//!
//! A run produces a value, not side effects: the emitted print tasks, the
//! board claims to be committed against the store, per-group load reports,
//! and the aggregated makespan. The caller persists all of it in a single
//! transaction — or none of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::BoardStatus;

/// A board-to-printer assignment emitted by a scheduling run.
///
/// Start and end carry both the absolute calendar timestamp and the relative
/// offset from the plan anchor (hours). The record identifier is assigned by
/// the persistence layer; within a run, `sequence` identifies the task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintTask {
    /// Owning plan identifier.
    pub plan_id: String,
    /// Assigned board identifier.
    pub board_id: String,
    /// Assigned printer identifier.
    pub printer_id: String,
    /// Absolute start timestamp.
    pub start: DateTime<Utc>,
    /// Absolute end timestamp.
    pub end: DateTime<Utc>,
    /// Start offset from the plan anchor (hours).
    pub start_offset_hours: f64,
    /// End offset from the plan anchor (hours).
    pub end_offset_hours: f64,
    /// Assignment order within the run (0-indexed, strictly increasing).
    pub sequence: u32,
}

impl PrintTask {
    /// Scheduled duration (hours).
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.end_offset_hours - self.start_offset_hours
    }
}

/// A pending status transition for a scheduled board.
///
/// `version` is the board version observed in the snapshot. The store must
/// commit the transition with a compare-and-swap on that version; a mismatch
/// means another run claimed the board first, and the whole transaction must
/// roll back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardClaim {
    /// Board to transition.
    pub board_id: String,
    /// Version the snapshot observed.
    pub version: u64,
    /// Status to transition to.
    pub status: BoardStatus,
}

/// Per-filament-group scheduling report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    /// Filament identifier keying this group.
    pub filament_id: String,
    /// Final load per compatible printer (hours), keyed by printer ID.
    pub printer_loads: BTreeMap<String, f64>,
    /// Maximum final load within this group (hours).
    pub makespan_hours: f64,
    /// Number of boards scheduled in this group.
    pub boards_scheduled: usize,
}

/// A filament group that could not be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedGroup {
    /// Filament identifier keying this group.
    pub filament_id: String,
    /// Number of waiting boards left untouched.
    pub board_count: usize,
}

/// Complete result of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Plan this run was executed for.
    pub plan_id: String,
    /// Emitted assignments, in sequence order.
    pub tasks: Vec<PrintTask>,
    /// Board status transitions to commit with the tasks.
    pub claims: Vec<BoardClaim>,
    /// Reports for groups that had at least one compatible printer.
    pub groups: Vec<GroupReport>,
    /// Groups skipped for lack of a compatible printer.
    pub skipped: Vec<SkippedGroup>,
    /// Overall makespan (hours). `None` when no task was emitted.
    pub makespan_hours: Option<f64>,
}

impl PlanOutcome {
    /// Creates an empty outcome for a plan.
    pub fn new(plan_id: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            tasks: Vec::new(),
            claims: Vec::new(),
            groups: Vec::new(),
            skipped: Vec::new(),
            makespan_hours: None,
        }
    }

    /// Whether the run emitted no assignments.
    pub fn is_noop(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of emitted tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Finds the task assigned to a given board.
    pub fn task_for_board(&self, board_id: &str) -> Option<&PrintTask> {
        self.tasks.iter().find(|t| t.board_id == board_id)
    }

    /// Returns all tasks assigned to a given printer.
    pub fn tasks_for_printer(&self, printer_id: &str) -> Vec<&PrintTask> {
        self.tasks
            .iter()
            .filter(|t| t.printer_id == printer_id)
            .collect()
    }

    /// Finds the claim for a given board.
    pub fn claim_for_board(&self, board_id: &str) -> Option<&BoardClaim> {
        self.claims.iter().find(|c| c.board_id == board_id)
    }

    /// Total scheduled hours on a printer, summed over its tasks.
    pub fn printer_busy_hours(&self, printer_id: &str) -> f64 {
        self.tasks_for_printer(printer_id)
            .iter()
            .map(|t| t.duration_hours())
            .sum()
    }

    /// Final loads across all printers in all processed groups.
    pub fn all_printer_loads(&self) -> BTreeMap<String, f64> {
        let mut loads = BTreeMap::new();
        for group in &self.groups {
            for (printer_id, load) in &group.printer_loads {
                loads.insert(printer_id.clone(), *load);
            }
        }
        loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(board: &str, printer: &str, start_h: f64, end_h: f64, seq: u32) -> PrintTask {
        let anchor = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let to_ts = |h: f64| anchor + chrono::Duration::milliseconds((h * 3_600_000.0) as i64);
        PrintTask {
            plan_id: "PL1".into(),
            board_id: board.into(),
            printer_id: printer.into(),
            start: to_ts(start_h),
            end: to_ts(end_h),
            start_offset_hours: start_h,
            end_offset_hours: end_h,
            sequence: seq,
        }
    }

    fn sample_outcome() -> PlanOutcome {
        let mut outcome = PlanOutcome::new("PL1");
        outcome.tasks.push(task("B1", "P1", 0.0, 5.0, 0));
        outcome.tasks.push(task("B2", "P2", 0.0, 3.0, 1));
        outcome.tasks.push(task("B3", "P2", 3.0, 7.0, 2));
        outcome.makespan_hours = Some(7.0);
        outcome
    }

    #[test]
    fn test_task_duration() {
        let t = task("B1", "P1", 2.0, 6.5, 0);
        assert!((t.duration_hours() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_outcome_queries() {
        let outcome = sample_outcome();
        assert_eq!(outcome.task_count(), 3);
        assert!(!outcome.is_noop());

        let b1 = outcome.task_for_board("B1").unwrap();
        assert_eq!(b1.printer_id, "P1");
        assert!(outcome.task_for_board("B99").is_none());

        assert_eq!(outcome.tasks_for_printer("P2").len(), 2);
        assert!((outcome.printer_busy_hours("P2") - 7.0).abs() < 1e-10);
        assert!((outcome.printer_busy_hours("P3") - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_outcome() {
        let outcome = PlanOutcome::new("PL1");
        assert!(outcome.is_noop());
        assert!(outcome.makespan_hours.is_none());
        assert_eq!(outcome.task_count(), 0);
    }

    #[test]
    fn test_all_printer_loads() {
        let mut outcome = sample_outcome();
        let mut loads = BTreeMap::new();
        loads.insert("P1".to_string(), 5.0);
        loads.insert("P2".to_string(), 7.0);
        outcome.groups.push(GroupReport {
            filament_id: "F1".into(),
            printer_loads: loads,
            makespan_hours: 7.0,
            boards_scheduled: 3,
        });

        let all = outcome.all_printer_loads();
        assert!((all["P1"] - 5.0).abs() < 1e-10);
        assert!((all["P2"] - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_outcome_serde_round_trip() {
        let outcome = sample_outcome();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: PlanOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.task_count(), 3);
        assert_eq!(back.tasks[0].board_id, "B1");
        assert_eq!(back.makespan_hours, Some(7.0));
    }
}
