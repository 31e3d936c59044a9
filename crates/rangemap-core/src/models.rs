//! Record types for the installation and capability-range tables.

use serde::{Deserialize, Serialize};

/// A fixed site with coordinates and zero or more declared capability codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    /// Display name, unique within a run (not enforced)
    pub name: String,

    /// Latitude in degrees; garbage values propagate unvalidated
    pub lat: f64,

    /// Longitude in degrees; garbage values propagate unvalidated
    pub lon: f64,

    /// Raw comma-delimited capability-code text; may be blank or absent
    #[serde(default)]
    pub missiles: String,
}

impl Installation {
    /// Parsed capability codes in declaration order: split on `','`,
    /// trimmed, empty tokens dropped.
    pub fn capability_codes(&self) -> Vec<&str> {
        self.missiles.split(',').map(str::trim).filter(|code| !code.is_empty()).collect()
    }
}

/// A named category of effect with a radius, display color, and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityRange {
    /// Capability code, the unique key within the range table
    #[serde(rename = "missile_code")]
    pub code: String,

    /// Display label
    pub label: String,

    /// Grouping tag used only by the CLI category filter
    pub category: String,

    /// Coverage radius in kilometers
    pub radius_km: f64,

    /// CSS-style color token; a blank cell loads as `None`
    pub color: Option<String>,
}

impl CapabilityRange {
    /// Drawn radius in the renderer's linear unit (meters).
    pub fn radius_m(&self) -> f64 {
        self.radius_km * 1000.0
    }
}
