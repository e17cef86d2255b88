//! Input validation for scheduling snapshots.
//!
//! Checks structural integrity of boards, printers, and the filament
//! catalog before a run. Detects:
//! - Duplicate IDs
//! - Non-positive or non-finite board durations
//! - References to filaments absent from the catalog
//!
//! A board whose filament has no compatible printer is *not* a validation
//! error — the scheduler skips that group and reports it in the outcome.

use std::collections::HashSet;

use crate::models::{Board, Filament, Printer};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A board's estimated duration is not a positive finite number.
    InvalidDuration,
    /// A board or printer references a filament not in the catalog.
    UnknownFilament,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling snapshot against the filament catalog.
///
/// Checks:
/// 1. No duplicate board IDs
/// 2. No duplicate printer IDs
/// 3. No duplicate filament IDs in the catalog
/// 4. Every board duration is finite and > 0
/// 5. Every board's and printer's filament exists in the catalog
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(
    boards: &[Board],
    printers: &[Printer],
    filaments: &[Filament],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut filament_ids = HashSet::new();
    for f in filaments {
        if !filament_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate filament ID: {}", f.id),
            ));
        }
    }

    let mut board_ids = HashSet::new();
    for board in boards {
        if !board_ids.insert(board.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate board ID: {}", board.id),
            ));
        }

        if !board.duration_hours.is_finite() || board.duration_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Board '{}' has invalid duration {}h",
                    board.id, board.duration_hours
                ),
            ));
        }

        if !filament_ids.contains(board.filament_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFilament,
                format!(
                    "Board '{}' references unknown filament '{}'",
                    board.id, board.filament_id
                ),
            ));
        }
    }

    let mut printer_ids = HashSet::new();
    for printer in printers {
        if !printer_ids.insert(printer.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate printer ID: {}", printer.id),
            ));
        }

        if !filament_ids.contains(printer.filament_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFilament,
                format!(
                    "Printer '{}' references unknown filament '{}'",
                    printer.id, printer.filament_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Filament> {
        vec![
            Filament::new("F1").with_material("PLA"),
            Filament::new("F2").with_material("PETG"),
        ]
    }

    #[test]
    fn test_valid_snapshot() {
        let boards = vec![Board::new("B1", "F1", 2.0), Board::new("B2", "F2", 3.5)];
        let printers = vec![Printer::new("P1", "F1"), Printer::new("P2", "F2")];
        assert!(validate_snapshot(&boards, &printers, &catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_board_id() {
        let boards = vec![Board::new("B1", "F1", 1.0), Board::new("B1", "F2", 2.0)];
        let errors = validate_snapshot(&boards, &[], &catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("board")));
    }

    #[test]
    fn test_duplicate_printer_id() {
        let printers = vec![Printer::new("P1", "F1"), Printer::new("P1", "F2")];
        let errors = validate_snapshot(&[], &printers, &catalog()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("printer")));
    }

    #[test]
    fn test_duplicate_filament_id() {
        let filaments = vec![Filament::new("F1"), Filament::new("F1")];
        let errors = validate_snapshot(&[], &[], &filaments).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_invalid_durations() {
        let boards = vec![
            Board::new("B1", "F1", 0.0),
            Board::new("B2", "F1", -2.0),
            Board::new("B3", "F1", f64::NAN),
        ];
        let errors = validate_snapshot(&boards, &[], &catalog()).unwrap_err();
        let duration_errors = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidDuration)
            .count();
        assert_eq!(duration_errors, 3);
    }

    #[test]
    fn test_unknown_filament_reference() {
        let boards = vec![Board::new("B1", "F-NOPE", 1.0)];
        let printers = vec![Printer::new("P1", "F-NADA")];
        let errors = validate_snapshot(&boards, &printers, &catalog()).unwrap_err();

        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::UnknownFilament)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let boards = vec![Board::new("B1", "F-NOPE", -1.0)];
        let errors = validate_snapshot(&boards, &[], &catalog()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
