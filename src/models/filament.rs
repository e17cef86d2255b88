//! Filament model.
//!
//! Only the identifier participates in scheduling: it is the join key
//! between a board's requirement and a printer's loaded spool. The display
//! metadata exists for catalog validation and reporting.

use serde::{Deserialize, Serialize};

/// A filament (consumable) type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filament {
    /// Unique filament identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Material classification (e.g., "PLA", "PETG").
    pub material: String,
    /// Display color as a hex string (e.g., "#e30022").
    pub color_hex: String,
}

impl Filament {
    /// Creates a filament with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            material: String::new(),
            color_hex: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the material classification.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = color_hex.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filament_builder() {
        let filament = Filament::new("F1")
            .with_name("Signal Red")
            .with_material("PLA")
            .with_color("#e30022");

        assert_eq!(filament.id, "F1");
        assert_eq!(filament.name, "Signal Red");
        assert_eq!(filament.material, "PLA");
        assert_eq!(filament.color_hex, "#e30022");
    }
}
