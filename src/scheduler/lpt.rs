//! LPT (Longest Processing Time first) assignment engine.
//!
//! # Algorithm
//!
//! 1. Partition waiting boards by required filament.
//! 2. For each group, find the printers loaded with that filament. A group
//!    with none is skipped: its boards stay waiting and the skip is reported.
//! 3. Sort the group's boards by duration descending (ties: ascending board
//!    ID), then assign each to the least-loaded compatible printer (ties:
//!    lowest printer ID). Loads are zeroed per group.
//! 4. Overall makespan = maximum final load across all processed groups.
//!
//! Sorting before greedy least-loaded assignment gives the classical
//! (4/3 − 1/3m) approximation to the optimal makespan on m identical
//! machines. Printer speed factors are not applied, so the bound holds
//! under the identical-machine assumption only.
//!
//! # Complexity
//! O(n log n + n·m) per group, n = boards, m = compatible printers.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use std::collections::BTreeMap;

use crate::error::{Result, ScheduleError};
use crate::models::{
    Board, BoardClaim, BoardStatus, GroupReport, Plan, PlanOutcome, PrintTask, Printer,
    SkippedGroup,
};

use super::Timeline;

/// Immutable input to a scheduling run.
///
/// The caller reads plan, boards, and printers in one consistent view and
/// hands them over; the scheduler performs no I/O. Committing the outcome
/// (tasks, claims, plan makespan) atomically is the caller's transaction.
#[derive(Debug, Clone)]
pub struct PlanSnapshot {
    /// The plan being scheduled, carrying the calendar anchor.
    pub plan: Plan,
    /// All boards visible to the run; only waiting ones are considered.
    pub boards: Vec<Board>,
    /// The printer pool.
    pub printers: Vec<Printer>,
}

impl PlanSnapshot {
    /// Creates a snapshot.
    pub fn new(plan: Plan, boards: Vec<Board>, printers: Vec<Printer>) -> Self {
        Self {
            plan,
            boards,
            printers,
        }
    }
}

/// The LPT scheduling service.
///
/// Stateless; one call to [`LptScheduler::plan`] executes one run.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use printplan::models::{Board, Plan, Printer};
/// use printplan::scheduler::{LptScheduler, PlanSnapshot};
///
/// let plan = Plan::new("PL1", Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());
/// let snapshot = PlanSnapshot::new(
///     plan,
///     vec![Board::new("B1", "F1", 4.0)],
///     vec![Printer::new("P1", "F1")],
/// );
///
/// let outcome = LptScheduler::new().plan(&snapshot).unwrap();
/// assert_eq!(outcome.task_count(), 1);
/// assert_eq!(outcome.makespan_hours, Some(4.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LptScheduler;

impl LptScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Executes one scheduling run over the snapshot.
    ///
    /// Returns the complete outcome; the only error source is mapping
    /// relative offsets onto the calendar. Groups without a compatible
    /// printer and runs without any waiting board are soft conditions,
    /// reported in the outcome.
    pub fn plan(&self, snapshot: &PlanSnapshot) -> Result<PlanOutcome> {
        let timeline = Timeline::new(snapshot.plan.anchor);
        let waiting: Vec<&Board> = snapshot.boards.iter().filter(|b| b.is_waiting()).collect();

        tracing::info!(
            plan_id = %snapshot.plan.id,
            waiting = waiting.len(),
            printers = snapshot.printers.len(),
            "scheduling run started"
        );

        let mut outcome = PlanOutcome::new(&snapshot.plan.id);
        let mut sequence: u32 = 0;

        for (filament_id, mut boards) in group_by_filament(&waiting) {
            let printers = compatible_printers(&snapshot.printers, filament_id);
            if printers.is_empty() {
                tracing::warn!(
                    filament_id,
                    boards = boards.len(),
                    "no compatible printer, group skipped"
                );
                outcome.skipped.push(SkippedGroup {
                    filament_id: filament_id.to_string(),
                    board_count: boards.len(),
                });
                continue;
            }

            // Duration descending; ties broken by ascending board ID so the
            // result is independent of snapshot ordering.
            boards.sort_by(|a, b| {
                b.duration_hours
                    .total_cmp(&a.duration_hours)
                    .then_with(|| a.id.cmp(&b.id))
            });

            // Loads start at zero for every compatible printer in this group.
            let mut loads: BTreeMap<String, f64> =
                printers.iter().map(|p| (p.id.clone(), 0.0)).collect();

            for board in &boards {
                let printer_id = match least_loaded(&loads) {
                    Some(id) => id.to_string(),
                    None => break,
                };
                let start = loads[&printer_id];
                let end = start + board.duration_hours;

                // End is anchored to the start timestamp, not recomputed from
                // the end offset, so end − start equals the duration exactly.
                let start_ts = timeline.at_offset(start)?;
                let end_ts = start_ts
                    .checked_add_signed(Timeline::span(board.duration_hours)?)
                    .ok_or(ScheduleError::TimestampOverflow { offset_hours: end })?;

                tracing::debug!(
                    board_id = %board.id,
                    printer_id = %printer_id,
                    duration = board.duration_hours,
                    start_offset = start,
                    "board assigned"
                );

                outcome.tasks.push(PrintTask {
                    plan_id: snapshot.plan.id.clone(),
                    board_id: board.id.clone(),
                    printer_id: printer_id.clone(),
                    start: start_ts,
                    end: end_ts,
                    start_offset_hours: start,
                    end_offset_hours: end,
                    sequence,
                });
                outcome.claims.push(BoardClaim {
                    board_id: board.id.clone(),
                    version: board.version,
                    status: BoardStatus::Scheduled,
                });

                loads.insert(printer_id, end);
                sequence += 1;
            }

            let group_makespan = loads.values().fold(0.0_f64, |acc, &l| acc.max(l));
            tracing::info!(
                filament_id,
                boards = boards.len(),
                group_makespan,
                "group scheduled"
            );
            outcome.groups.push(GroupReport {
                filament_id: filament_id.to_string(),
                printer_loads: loads,
                makespan_hours: group_makespan,
                boards_scheduled: boards.len(),
            });
        }

        outcome.makespan_hours = if outcome.tasks.is_empty() {
            tracing::warn!(plan_id = %snapshot.plan.id, "no assignments produced");
            None
        } else {
            let makespan = outcome
                .groups
                .iter()
                .map(|g| g.makespan_hours)
                .fold(0.0_f64, f64::max);
            Some(makespan)
        };

        tracing::info!(
            plan_id = %snapshot.plan.id,
            tasks = outcome.task_count(),
            makespan = ?outcome.makespan_hours,
            "scheduling run finished"
        );
        Ok(outcome)
    }
}

/// Partitions waiting boards by required filament.
///
/// The ordered map makes group processing order deterministic. Filaments
/// with no waiting board simply do not appear.
fn group_by_filament<'a>(boards: &[&'a Board]) -> BTreeMap<&'a str, Vec<&'a Board>> {
    let mut groups: BTreeMap<&str, Vec<&Board>> = BTreeMap::new();
    for board in boards {
        groups.entry(board.filament_id.as_str()).or_default().push(board);
    }
    groups
}

/// Printers loaded with the given filament.
fn compatible_printers<'a>(printers: &'a [Printer], filament_id: &str) -> Vec<&'a Printer> {
    printers.iter().filter(|p| p.accepts(filament_id)).collect()
}

/// Printer with the minimum load; ties broken toward the lowest printer ID.
///
/// Keeps the first strict minimum seen in key-ascending iteration, so equal
/// loads resolve to the smallest ID.
fn least_loaded(loads: &BTreeMap<String, f64>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (id, &load) in loads {
        match best {
            Some((_, best_load)) if load >= best_load => {}
            _ => best = Some((id, load)),
        }
    }
    best.map(|(id, _)| id)
}
