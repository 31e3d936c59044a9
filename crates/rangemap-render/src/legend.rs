//! Static legend markup.

use rangemap_core::config::MapStyle;
use rangemap_core::models::CapabilityRange;

/// Build the legend: one row per range-table row, in table order, as a
/// colored bullet plus `code (radius_km km)`.
///
/// A row with no color uses `style.fallback_color` for that row only. The
/// legend always lists the full (possibly filtered) range table, regardless
/// of which layers are toggled on.
pub fn build_legend(ranges: &[CapabilityRange], style: &MapStyle) -> String {
    let mut markup = String::from(
        "<div class=\"coverage-legend\">\n  <div class=\"coverage-legend-title\">Coverage ranges</div>\n  <ul>\n",
    );
    for range in ranges {
        let color = range.color.as_deref().unwrap_or(&style.fallback_color);
        markup.push_str(&format!(
            "    <li><span class=\"legend-swatch\" style=\"background: {}\"></span>{} ({} km)</li>\n",
            color, range.code, range.radius_km
        ));
    }
    markup.push_str("  </ul>\n</div>");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(code: &str, radius_km: f64, color: Option<&str>) -> CapabilityRange {
        CapabilityRange {
            code: code.to_string(),
            label: code.to_string(),
            category: "MRBM".to_string(),
            radius_km,
            color: color.map(str::to_string),
        }
    }

    #[test]
    fn one_row_per_range_in_table_order() {
        let ranges = vec![range("X-2", 1000.0, Some("blue")), range("X-1", 500.0, Some("red"))];
        let legend = build_legend(&ranges, &MapStyle::default());

        assert_eq!(legend.matches("<li>").count(), 2);
        let x2 = legend.find("X-2 (1000 km)").expect("X-2 row");
        let x1 = legend.find("X-1 (500 km)").expect("X-1 row");
        assert!(x2 < x1, "rows must keep table order");
    }

    #[test]
    fn rows_carry_their_color() {
        let ranges = vec![range("X-1", 500.0, Some("red"))];
        let legend = build_legend(&ranges, &MapStyle::default());
        assert!(legend.contains("background: red"));
    }

    #[test]
    fn null_color_renders_the_fallback() {
        let ranges = vec![range("X-1", 500.0, None)];
        let legend = build_legend(&ranges, &MapStyle::default());
        assert!(legend.contains("background: black"));
        assert!(!legend.contains("background: \""));
    }

    #[test]
    fn empty_table_renders_no_rows() {
        let legend = build_legend(&[], &MapStyle::default());
        assert_eq!(legend.matches("<li>").count(), 0);
    }
}
