//! Printer model.
//!
//! A printer is compatible with exactly one filament and processes one board
//! at a time. Speed and changeover attributes are part of the record but are
//! not factored into assignment: the LPT engine treats every compatible
//! printer as identical, which is the assumption under which the LPT
//! approximation bound holds.

use serde::{Deserialize, Serialize};

/// A printer that can process boards requiring its loaded filament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Printer {
    /// Unique printer identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Identifier of the filament this printer is loaded with.
    pub filament_id: String,
    /// Nominal print speed factor. Carried from the machine record; not
    /// used by the assignment algorithm.
    pub speed_factor: f64,
    /// Filament changeover time (hours). Carried from the machine record;
    /// not used by the assignment algorithm.
    pub changeover_hours: f64,
    /// Hardware model label.
    pub model: String,
}

impl Printer {
    /// Creates a printer loaded with the given filament.
    pub fn new(id: impl Into<String>, filament_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            filament_id: filament_id.into(),
            speed_factor: 1.0,
            changeover_hours: 0.0,
            model: String::new(),
        }
    }

    /// Sets the printer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the nominal speed factor.
    pub fn with_speed_factor(mut self, speed_factor: f64) -> Self {
        self.speed_factor = speed_factor;
        self
    }

    /// Sets the filament changeover time (hours).
    pub fn with_changeover_hours(mut self, changeover_hours: f64) -> Self {
        self.changeover_hours = changeover_hours;
        self
    }

    /// Sets the hardware model label.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Whether this printer can process a board requiring `filament_id`.
    #[inline]
    pub fn accepts(&self, filament_id: &str) -> bool {
        self.filament_id == filament_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_builder() {
        let printer = Printer::new("P1", "F-PLA-RED")
            .with_name("Bay 1")
            .with_speed_factor(1.2)
            .with_changeover_hours(0.25)
            .with_model("MK4");

        assert_eq!(printer.id, "P1");
        assert_eq!(printer.name, "Bay 1");
        assert_eq!(printer.filament_id, "F-PLA-RED");
        assert!((printer.speed_factor - 1.2).abs() < 1e-10);
        assert!((printer.changeover_hours - 0.25).abs() < 1e-10);
        assert_eq!(printer.model, "MK4");
    }

    #[test]
    fn test_printer_accepts() {
        let printer = Printer::new("P1", "F1");
        assert!(printer.accepts("F1"));
        assert!(!printer.accepts("F2"));
    }
}
