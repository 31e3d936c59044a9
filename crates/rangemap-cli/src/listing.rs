//! Read-only report modes, independent of the map pipeline.
//!
//! Bases are listed with their raw capability-code text, so a base with no
//! codes still shows up even though it would contribute to no layer.

use crate::output::OutputWriter;
use rangemap_core::models::{CapabilityRange, Installation};
use tabled::Tabled;

/// Print every base and its raw missile-code text.
pub fn list_installations(output: &OutputWriter, installations: &[Installation]) {
    #[derive(Tabled)]
    struct BaseRow {
        #[tabled(rename = "Base")]
        name: String,
        #[tabled(rename = "Missiles")]
        missiles: String,
    }

    let rows: Vec<BaseRow> = installations
        .iter()
        .map(|inst| BaseRow { name: inst.name.clone(), missiles: inst.missiles.clone() })
        .collect();

    output.section("Bases");
    output.table(rows);
}

/// Print every missile type with code, label, category, and radius.
pub fn list_ranges(output: &OutputWriter, ranges: &[CapabilityRange]) {
    #[derive(Tabled)]
    struct RangeRow {
        #[tabled(rename = "Code")]
        code: String,
        #[tabled(rename = "Label")]
        label: String,
        #[tabled(rename = "Category")]
        category: String,
        #[tabled(rename = "Range (km)")]
        radius_km: f64,
    }

    let rows: Vec<RangeRow> = ranges
        .iter()
        .map(|range| RangeRow {
            code: range.code.clone(),
            label: range.label.clone(),
            category: range.category.clone(),
            radius_km: range.radius_km,
        })
        .collect();

    output.section("Missiles");
    output.table(rows);
}
