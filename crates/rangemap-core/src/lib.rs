//! rangemap-core - Records, tables, filters, and style configuration
//!
//! This crate contains the data layer shared by the renderer and the CLI:
//! the typed installation and capability-range records, the CSV-backed
//! record store, the pre-build filters, and the map styling defaults.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;

pub use error::{RangemapError, Result};
