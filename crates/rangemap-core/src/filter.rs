//! Table filters applied before layer construction.
//!
//! The code and name filters are case-sensitive substring matches against
//! the raw record text, so a code filter of "DF-1" also matches "DF-17".
//! The category filter is exact, case-insensitive equality. The asymmetry
//! mirrors the product behavior and is kept as-is.

use crate::models::{CapabilityRange, Installation};

/// Narrow installations by capability-code substring and/or name substring.
///
/// Filters compose with AND semantics; `None` passes every record through.
/// The input slice is never mutated.
pub fn filter_installations(
    installations: &[Installation],
    capability_code: Option<&str>,
    name: Option<&str>,
) -> Vec<Installation> {
    installations
        .iter()
        .filter(|inst| capability_code.map_or(true, |code| inst.missiles.contains(code)))
        .filter(|inst| name.map_or(true, |text| inst.name.contains(text)))
        .cloned()
        .collect()
}

/// Narrow ranges to a single category (exact match, case-insensitive).
pub fn filter_ranges(ranges: &[CapabilityRange], category: Option<&str>) -> Vec<CapabilityRange> {
    let wanted = category.map(str::to_uppercase);
    ranges
        .iter()
        .filter(|range| wanted.as_deref().map_or(true, |cat| range.category.to_uppercase() == cat))
        .cloned()
        .collect()
}
