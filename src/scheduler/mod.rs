//! LPT scheduling service and run evaluation.
//!
//! # Algorithm
//!
//! `LptScheduler` partitions waiting boards by filament, then runs greedy
//! LPT (longest duration first, least-loaded printer) within each group and
//! aggregates the per-group maxima into the run makespan.
//!
//! # Components
//!
//! - [`LptScheduler`] / [`PlanSnapshot`]: the run itself
//! - [`Timeline`]: relative offsets → absolute timestamps
//! - [`PlanKpi`]: makespan, utilization, and coverage metrics
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod kpi;
mod lpt;
mod timeline;

pub use kpi::PlanKpi;
pub use lpt::{LptScheduler, PlanSnapshot};
pub use timeline::Timeline;
