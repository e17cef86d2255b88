//! Board (print job) model.
//!
//! A board is the unit of work: one plate to be printed, requiring a single
//! filament for a fixed estimated duration. Boards are created by order
//! intake; the scheduler only transitions their status.
//!
//! # Time Representation
//! Durations and loads are in hours (positive reals). Absolute timestamps
//! appear only on emitted tasks, via the plan's calendar anchor.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a board within the scheduling subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    /// Awaiting assignment to a printer.
    #[default]
    Waiting,
    /// Assigned to a printer by a scheduling run.
    Scheduled,
}

/// A board (print job) to be scheduled.
///
/// Requires exactly one filament and occupies one printer for
/// `duration_hours`. The `version` field is an optimistic-concurrency token:
/// every persisted mutation of a board increments it, and the claim emitted
/// by a scheduling run must be committed with a compare-and-swap against the
/// version observed in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Unique board identifier.
    pub id: String,
    /// Identifier of the product model this board belongs to.
    pub model_id: Option<String>,
    /// Required filament identifier (compatibility key).
    pub filament_id: String,
    /// Estimated processing duration (hours, > 0).
    pub duration_hours: f64,
    /// Current lifecycle status.
    pub status: BoardStatus,
    /// Print file name, if one is attached.
    pub source_file: Option<String>,
    /// Optimistic-concurrency version of the persisted record.
    pub version: u64,
}

impl Board {
    /// Creates a waiting board.
    pub fn new(
        id: impl Into<String>,
        filament_id: impl Into<String>,
        duration_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            model_id: None,
            filament_id: filament_id.into(),
            duration_hours,
            status: BoardStatus::Waiting,
            source_file: None,
            version: 0,
        }
    }

    /// Sets the product model identifier.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Sets the attached print file name.
    pub fn with_source_file(mut self, file: impl Into<String>) -> Self {
        self.source_file = Some(file.into());
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: BoardStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the optimistic-concurrency version.
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Whether this board is still awaiting assignment.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == BoardStatus::Waiting
    }
}
