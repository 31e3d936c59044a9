//! Leaflet document serialization.
//!
//! Produces one self-contained HTML file pinning Leaflet 1.9.4 from a CDN.
//! Rendering is deterministic: feature groups get sequential identifiers in
//! attachment order and user-supplied text is embedded through JSON
//! escaping, so identical inputs always serialize byte-identically.

use crate::map::Map;

const HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Coverage map</title>

  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    html, body { height: 100%; margin: 0; }
    #map { height: 100%; width: 100%; }

    .coverage-legend {
      position: fixed;
      bottom: 24px;
      left: 12px;
      z-index: 1000;
      background: rgba(255, 255, 255, 0.92);
      color: #111;
      padding: 8px 12px;
      border-radius: 6px;
      font: 12px/1.6 sans-serif;
      box-shadow: 0 1px 4px rgba(0, 0, 0, 0.4);
    }

    .coverage-legend-title {
      font-weight: bold;
      margin-bottom: 4px;
    }

    .coverage-legend ul {
      list-style: none;
      margin: 0;
      padding: 0;
    }

    .legend-swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      margin-right: 6px;
      border-radius: 50%;
    }
  </style>
</head>
"#;

/// Serialize the composed map to an HTML document string.
pub fn render(map: &Map) -> String {
    let mut doc = String::from(HEAD);
    doc.push_str("<body>\n  <div id=\"map\"></div>\n");

    if let Some(legend) = &map.legend {
        doc.push_str(legend);
        doc.push('\n');
    }

    doc.push_str("  <script>\n");
    doc.push_str(&format!(
        "    var map = L.map(\"map\").setView([{}, {}], {});\n",
        map.center[0], map.center[1], map.zoom
    ));
    doc.push_str(&format!(
        "    L.tileLayer({}, {{ attribution: {}, maxZoom: {} }}).addTo(map);\n",
        js_str(map.tiles.url),
        js_str(map.tiles.attribution),
        map.tiles.max_zoom
    ));

    for (index, group) in map.feature_groups.iter().enumerate() {
        doc.push_str(&format!("\n    var layer_{} = L.featureGroup();\n", index));
        for marker in &group.markers {
            doc.push_str(&format!(
                "    L.marker([{}, {}]).bindTooltip({}).bindPopup({}).addTo(layer_{});\n",
                marker.lat,
                marker.lon,
                js_str(&marker.tooltip),
                js_str(&marker.popup),
                index
            ));
        }
        for circle in &group.circles {
            doc.push_str(&format!(
                "    L.circle([{}, {}], {{ radius: {}, color: {}, weight: {}, fill: true, fillOpacity: {} }}).bindPopup({}).addTo(layer_{});\n",
                circle.lat,
                circle.lon,
                circle.radius_m,
                js_str(&circle.color),
                circle.weight,
                circle.fill_opacity,
                js_str(&circle.popup),
                index
            ));
        }
        doc.push_str(&format!("    layer_{}.addTo(map);\n", index));
    }

    if map.layer_control {
        doc.push_str("\n    L.control.layers(null, {\n");
        for (index, group) in map.feature_groups.iter().enumerate() {
            let separator = if index + 1 == map.feature_groups.len() { "" } else { "," };
            doc.push_str(&format!(
                "      {}: layer_{}{}\n",
                js_str(&group.name),
                index,
                separator
            ));
        }
        doc.push_str("    }, { collapsed: false }).addTo(map);\n");
    }

    doc.push_str("  </script>\n</body>\n</html>\n");
    doc
}

/// Embed text as a JavaScript string literal.
fn js_str(text: &str) -> String {
    serde_json::to_string(text).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Circle, FeatureGroup, Map, Marker, TileLayer};

    fn sample_map() -> Map {
        let mut group = FeatureGroup::new("X-1 coverage");
        group.add_marker(Marker {
            lat: 30.0,
            lon: 114.0,
            tooltip: "Base A".to_string(),
            popup: "Base A".to_string(),
        });
        group.add_circle(Circle {
            lat: 30.0,
            lon: 114.0,
            radius_m: 500_000.0,
            color: "red".to_string(),
            fill_opacity: 0.08,
            weight: 3,
            popup: "Base A - X-1 label".to_string(),
        });

        let mut map = Map::new([30.0, 115.0], 4, TileLayer::dark());
        map.add_feature_group(group);
        map.add_feature_group(FeatureGroup::new("X-2 coverage"));
        map.add_layer_control();
        map.set_legend("<div class=\"coverage-legend\"></div>");
        map
    }

    #[test]
    fn document_contains_viewport_tiles_and_features() {
        let html = render(&sample_map());

        assert!(html.contains("L.map(\"map\").setView([30, 115], 4)"));
        assert!(html.contains("dark_all"));
        assert!(html.contains("L.marker([30, 114]).bindTooltip(\"Base A\")"));
        assert!(html.contains("radius: 500000"));
        assert!(html.contains("color: \"red\""));
        assert!(html.contains("bindPopup(\"Base A - X-1 label\")"));
    }

    #[test]
    fn layer_control_lists_every_group_in_order() {
        let html = render(&sample_map());

        let first = html.find("\"X-1 coverage\": layer_0").expect("X-1 entry");
        let second = html.find("\"X-2 coverage\": layer_1").expect("X-2 entry");
        assert!(first < second);
    }

    #[test]
    fn empty_groups_are_still_attached_and_listed() {
        let html = render(&sample_map());

        assert!(html.contains("var layer_1 = L.featureGroup();"));
        assert!(html.contains("layer_1.addTo(map);"));
        assert!(html.contains("\"X-2 coverage\": layer_1"));
    }

    #[test]
    fn legend_markup_is_embedded_verbatim() {
        let html = render(&sample_map());
        assert!(html.contains("<div class=\"coverage-legend\"></div>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let map = sample_map();
        assert_eq!(render(&map), render(&map));
    }

    #[test]
    fn names_with_quotes_are_escaped() {
        let mut group = FeatureGroup::new("the \"best\" coverage");
        group.add_marker(Marker {
            lat: 0.0,
            lon: 0.0,
            tooltip: "say \"hi\"".to_string(),
            popup: "say \"hi\"".to_string(),
        });

        let mut map = Map::new([0.0, 0.0], 2, TileLayer::light());
        map.add_feature_group(group);
        map.add_layer_control();

        let html = render(&map);
        assert!(html.contains("bindTooltip(\"say \\\"hi\\\"\")"));
        assert!(html.contains("\"the \\\"best\\\" coverage\": layer_0"));
    }

    #[test]
    fn control_is_omitted_until_attached() {
        let mut map = Map::new([0.0, 0.0], 2, TileLayer::dark());
        map.add_feature_group(FeatureGroup::new("X-1 coverage"));

        let html = render(&map);
        assert!(!html.contains("L.control.layers"));
    }
}
