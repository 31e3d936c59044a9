use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// rangemap - layered coverage-map generator
#[derive(Parser, Debug)]
#[command(name = "rangemap")]
#[command(about = "Generate layered coverage maps from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Keep only bases carrying this capability code (substring match, e.g. DF-17)
    #[arg(long, value_name = "CODE")]
    pub missile: Option<String>,

    /// Keep only bases whose name contains this text (e.g. "Brigade 626")
    #[arg(long, value_name = "NAME")]
    pub base: Option<String>,

    /// Keep only ranges in this category (exact match, case-insensitive; e.g. SRBM, ICBM)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Map theme
    #[arg(long, value_enum, default_value = "dark")]
    pub theme: Theme,

    /// Output HTML file path
    #[arg(long, value_name = "PATH", default_value = "output/cli_generated_map.html")]
    pub output: PathBuf,

    /// Ignore --missile and --base and include every base
    #[arg(long)]
    pub all: bool,

    /// List all bases and exit; with other filter flags the pipeline continues
    #[arg(long)]
    pub list_bases: bool,

    /// List all missile types and exit; with other filter flags the pipeline continues
    #[arg(long)]
    pub list_missiles: bool,

    /// Base table path
    #[arg(long, value_name = "PATH", default_value = "data/bases.csv")]
    pub bases: PathBuf,

    /// Missile-range table path
    #[arg(long, value_name = "PATH", default_value = "data/ranges.csv")]
    pub ranges: PathBuf,

    /// Optional TOML style overlay (fill opacity, stroke weight, fallback color, viewport)
    #[arg(long, value_name = "PATH")]
    pub style: Option<PathBuf>,
}

/// Background tile preset selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Theme {
    /// CartoDB dark_matter tiles
    Dark,
    /// CartoDB positron tiles
    Light,
}

impl Cli {
    /// True when any narrowing flag is present. A bare listing flag exits
    /// after printing; combined with one of these, the pipeline continues.
    pub fn has_filter_flags(&self) -> bool {
        self.missile.is_some() || self.base.is_some() || self.category.is_some() || self.all
    }
}
