//! The linear generation pipeline: load, list, filter, build, export.
//!
//! An empty filter result is a terminal, non-error condition: the run
//! reports, exits cleanly, and writes no document.

use crate::cli::{Cli, Theme};
use crate::listing;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use rangemap_core::config::MapStyle;
use rangemap_core::filter::{filter_installations, filter_ranges};
use rangemap_core::store::RecordStore;
use rangemap_render::layers::build_layers;
use rangemap_render::legend::build_legend;
use rangemap_render::map::{Map, TileLayer};
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    let output = OutputWriter::new();

    let store = RecordStore::load(&cli.bases, &cli.ranges)
        .context("failed to load input tables")?;

    // Listing modes come first; a bare listing flag exits after printing.
    if cli.list_bases {
        listing::list_installations(&output, store.installations());
        if !cli.has_filter_flags() {
            return Ok(());
        }
    }
    if cli.list_missiles {
        listing::list_ranges(&output, store.ranges());
        if !cli.has_filter_flags() {
            return Ok(());
        }
    }

    // Category narrows the range table; the other filters never touch it.
    let ranges = filter_ranges(store.ranges(), cli.category.as_deref());
    if let Some(category) = cli.category.as_deref() {
        if ranges.is_empty() {
            output.warning(format!("No missiles found in category '{}'. Exiting.", category));
            return Ok(());
        }
    }

    let installations = if cli.all {
        store.installations().to_vec()
    } else {
        let filtered =
            filter_installations(store.installations(), cli.missile.as_deref(), cli.base.as_deref());
        if filtered.is_empty() {
            output.warning("No bases matched your base/missile filters. Exiting.");
            return Ok(());
        }
        filtered
    };

    let style = match &cli.style {
        Some(path) => MapStyle::load_from_file(path)
            .with_context(|| format!("failed to load style config {}", path.display()))?,
        None => MapStyle::default(),
    };

    let tiles = match cli.theme {
        Theme::Dark => TileLayer::dark(),
        Theme::Light => TileLayer::light(),
    };

    let mut map = Map::new(style.center, style.zoom, tiles);
    for layer in build_layers(&installations, &ranges, &style) {
        map.add_feature_group(layer);
    }
    map.add_layer_control();
    map.set_legend(build_legend(&ranges, &style));

    map.save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        installations = installations.len(),
        layers = ranges.len(),
        output = %cli.output.display(),
        "map generated"
    );
    output.success(format!("Map generated: {}", cli.output.display()));

    Ok(())
}
