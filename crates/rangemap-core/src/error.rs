//! Error types for rangemap

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RangemapError {
    // Table errors
    #[error("Cannot read table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Table {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    // Configuration errors
    #[error("Invalid style config {path}: {reason}")]
    StyleInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RangemapError>;
