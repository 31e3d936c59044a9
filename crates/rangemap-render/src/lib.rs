//! rangemap-render - Map document model, coverage layers, legend, and HTML export
//!
//! The document model is plain data (tile preset, markers, circles, feature
//! groups, one layer-toggle control); [`layers`] and [`legend`] shape the
//! core records into it, and [`html`] serializes the result into one
//! self-contained Leaflet document.

pub mod html;
pub mod layers;
pub mod legend;
pub mod map;

pub use map::{Circle, FeatureGroup, Map, Marker, TileLayer};
