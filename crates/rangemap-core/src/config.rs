//! Map styling configuration.
//!
//! The opacity, stroke, fallback-color, and viewport constants live here so
//! the layer builder and the legend builder share one documented set of
//! defaults instead of scattered literals. An optional TOML file overlays
//! individual fields; everything it leaves unset keeps its default.

use crate::error::{RangemapError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Styling applied to coverage circles, the legend, and the map viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStyle {
    /// Fill opacity for coverage circles, 0.0..=1.0
    pub fill_opacity: f64,

    /// Stroke weight for coverage circles, in pixels
    pub stroke_weight: u32,

    /// Color substituted when a range row has no color; applies to both the
    /// row's circles and its legend entry
    pub fallback_color: String,

    /// Initial viewport center as [lat, lon]
    pub center: [f64; 2],

    /// Initial zoom level
    pub zoom: u8,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            fill_opacity: 0.08,
            stroke_weight: 3,
            fallback_color: "black".to_string(),
            center: [30.0, 115.0],
            zoom: 4,
        }
    }
}

/// Partial style as written in a TOML file; unset fields keep defaults.
#[derive(Debug, Default, Deserialize)]
struct FileStyle {
    fill_opacity: Option<f64>,
    stroke_weight: Option<u32>,
    fallback_color: Option<String>,
    center: Option<[f64; 2]>,
    zoom: Option<u8>,
}

impl MapStyle {
    /// Overlay the defaults with the fields set in a TOML style file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RangemapError::StyleInvalid {
            path: path.to_path_buf(),
            reason: format!("cannot read file: {}", e),
        })?;

        let file: FileStyle = toml::from_str(&content).map_err(|e| RangemapError::StyleInvalid {
            path: path.to_path_buf(),
            reason: format!("cannot parse TOML: {}", e),
        })?;

        let mut style = Self::default();
        if let Some(fill_opacity) = file.fill_opacity {
            style.fill_opacity = fill_opacity;
        }
        if let Some(stroke_weight) = file.stroke_weight {
            style.stroke_weight = stroke_weight;
        }
        if let Some(fallback_color) = file.fallback_color {
            style.fallback_color = fallback_color;
        }
        if let Some(center) = file.center {
            style.center = center;
        }
        if let Some(zoom) = file.zoom {
            style.zoom = zoom;
        }
        Ok(style)
    }
}
