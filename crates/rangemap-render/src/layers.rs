//! Coverage-layer construction.
//!
//! One feature group per capability-range row, populated only with the
//! installations that declare that row's code. There is no combined "all"
//! layer.

use crate::map::{Circle, FeatureGroup, Marker};
use rangemap_core::config::MapStyle;
use rangemap_core::models::{CapabilityRange, Installation};
use std::collections::HashMap;
use tracing::debug;

/// Build one coverage layer per range row, named `"{code} coverage"`, in
/// row order. Row order determines the default listing order in the layer
/// control.
///
/// The `code -> range` lookup is built once per call; duplicate codes
/// silently overwrite earlier entries. Installations with no parsed codes
/// contribute nothing, and codes absent from the range table are dropped
/// without error. Empty layers are kept.
pub fn build_layers(
    installations: &[Installation],
    ranges: &[CapabilityRange],
    style: &MapStyle,
) -> Vec<FeatureGroup> {
    let mut groups: Vec<FeatureGroup> = ranges
        .iter()
        .map(|range| FeatureGroup::new(format!("{} coverage", range.code)))
        .collect();

    // last write wins on duplicate codes
    let mut lookup: HashMap<&str, (usize, &CapabilityRange)> = HashMap::new();
    for (position, range) in ranges.iter().enumerate() {
        lookup.insert(range.code.as_str(), (position, range));
    }

    for installation in installations {
        let codes = installation.capability_codes();
        if codes.is_empty() {
            debug!(name = %installation.name, "installation declares no capability codes, skipping");
            continue;
        }
        for code in codes {
            let Some(&(position, range)) = lookup.get(code) else {
                debug!(name = %installation.name, code, "unknown capability code, skipping");
                continue;
            };
            let group = &mut groups[position];
            group.add_marker(Marker {
                lat: installation.lat,
                lon: installation.lon,
                tooltip: installation.name.clone(),
                popup: installation.name.clone(),
            });
            group.add_circle(Circle {
                lat: installation.lat,
                lon: installation.lon,
                radius_m: range.radius_m(),
                color: range.color.clone().unwrap_or_else(|| style.fallback_color.clone()),
                fill_opacity: style.fill_opacity,
                weight: style.stroke_weight,
                popup: format!("{} - {}", installation.name, range.label),
            });
        }
    }

    groups
}
