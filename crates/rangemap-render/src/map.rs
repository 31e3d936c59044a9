//! Map document model.
//!
//! A [`Map`] is the composed visualization as data: a viewport, a tile
//! preset, ordered feature groups, and overlay controls. Serialization to
//! HTML lives in [`crate::html`].

use rangemap_core::Result;
use std::path::Path;

/// A background tile preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayer {
    pub url: &'static str,
    pub attribution: &'static str,
    pub max_zoom: u8,
}

impl TileLayer {
    /// CartoDB dark_matter tiles.
    pub fn dark() -> Self {
        Self {
            url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
            max_zoom: 20,
        }
    }

    /// CartoDB positron tiles.
    pub fn light() -> Self {
        Self {
            url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
            max_zoom: 20,
        }
    }
}

/// A point marker; the name is shown as both tooltip and popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub tooltip: String,
    pub popup: String,
}

/// A radius circle drawn at a point, in the map's linear unit (meters).
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub lat: f64,
    pub lon: f64,
    pub radius_m: f64,
    pub color: String,
    pub fill_opacity: f64,
    pub weight: u32,
    pub popup: String,
}

/// An independently toggleable group of markers and circles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureGroup {
    pub name: String,
    pub markers: Vec<Marker>,
    pub circles: Vec<Circle>,
}

impl FeatureGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), markers: Vec::new(), circles: Vec::new() }
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn add_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Empty groups are valid and still listed in the layer control.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.circles.is_empty()
    }
}

/// The composed visualization document.
#[derive(Debug, Clone)]
pub struct Map {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tiles: TileLayer,
    pub feature_groups: Vec<FeatureGroup>,
    pub layer_control: bool,
    pub legend: Option<String>,
}

impl Map {
    pub fn new(center: [f64; 2], zoom: u8, tiles: TileLayer) -> Self {
        Self {
            center,
            zoom,
            tiles,
            feature_groups: Vec::new(),
            layer_control: false,
            legend: None,
        }
    }

    /// Attach a feature group; attachment order is the listing order in the
    /// layer control.
    pub fn add_feature_group(&mut self, group: FeatureGroup) {
        self.feature_groups.push(group);
    }

    /// Attach the single layer-toggle control listing every feature group.
    pub fn add_layer_control(&mut self) {
        self.layer_control = true;
    }

    /// Attach static legend markup, rendered as an always-visible overlay
    /// independent of layer toggling.
    pub fn set_legend(&mut self, markup: impl Into<String>) {
        self.legend = Some(markup.into());
    }

    /// Render and write the document, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, crate::html::render(self))?;
        Ok(())
    }
}
