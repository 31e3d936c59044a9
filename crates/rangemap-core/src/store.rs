//! In-memory tables loaded from flat CSV files.
//!
//! Required columns are validated against the header before any row is
//! deserialized, so a malformed table fails up front with the column name
//! instead of failing row-by-row.

use crate::error::{RangemapError, Result};
use crate::models::{CapabilityRange, Installation};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Columns the installation table must carry; `missiles` is optional.
const INSTALLATION_COLUMNS: &[&str] = &["name", "lat", "lon"];

/// Columns the range table must carry; `color` cells may be blank.
const RANGE_COLUMNS: &[&str] = &["missile_code", "label", "category", "radius_km", "color"];

/// The loaded installation and capability-range tables.
///
/// Tables are loaded once per run and never mutated; filters produce new,
/// smaller vectors.
#[derive(Debug, Clone)]
pub struct RecordStore {
    installations: Vec<Installation>,
    ranges: Vec<CapabilityRange>,
}

impl RecordStore {
    /// Load both tables. Unreadable files, missing required columns, and
    /// malformed rows are fatal.
    pub fn load(bases_path: &Path, ranges_path: &Path) -> Result<Self> {
        let installations = load_installations(bases_path)?;
        let ranges = load_ranges(ranges_path)?;
        Ok(Self { installations, ranges })
    }

    pub fn installations(&self) -> &[Installation] {
        &self.installations
    }

    pub fn ranges(&self) -> &[CapabilityRange] {
        &self.ranges
    }
}

/// Load the installation table from a CSV file.
pub fn load_installations(path: &Path) -> Result<Vec<Installation>> {
    let rows = load_table(path, INSTALLATION_COLUMNS)?;
    debug!(count = rows.len(), table = %path.display(), "loaded installation table");
    Ok(rows)
}

/// Load the capability-range table from a CSV file.
pub fn load_ranges(path: &Path) -> Result<Vec<CapabilityRange>> {
    let rows = load_table(path, RANGE_COLUMNS)?;
    debug!(count = rows.len(), table = %path.display(), "loaded range table");
    Ok(rows)
}

fn load_table<T: DeserializeOwned>(path: &Path, required: &[&'static str]) -> Result<Vec<T>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|source| table_error(path, source))?;

    let headers = reader.headers().map_err(|source| table_error(path, source))?;
    for &column in required {
        if !headers.iter().any(|header| header == column) {
            return Err(RangemapError::MissingColumn { path: path.to_path_buf(), column });
        }
    }

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|source| table_error(path, source))
}

fn table_error(path: &Path, source: csv::Error) -> RangemapError {
    RangemapError::Table { path: path.to_path_buf(), source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_table(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_typed_installation_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_table(
            &dir,
            "bases.csv",
            "name,lat,lon,missiles\nBase A,30.0,114.0,\"X-1, X-2\"\nBase B,28.5,110.2,\n",
        );

        let rows = load_installations(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Base A");
        assert_eq!(rows[0].capability_codes(), vec!["X-1", "X-2"]);
        assert_eq!(rows[1].missiles, "");
        assert!(rows[1].capability_codes().is_empty());
    }

    #[test]
    fn loads_typed_range_rows_with_nullable_color() {
        let dir = TempDir::new().unwrap();
        let path = write_table(
            &dir,
            "ranges.csv",
            "missile_code,label,category,radius_km,color\nX-1,X-1 short,SRBM,500,red\nX-2,X-2 medium,MRBM,1000,\n",
        );

        let rows = load_ranges(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "X-1");
        assert_eq!(rows[0].color.as_deref(), Some("red"));
        assert_eq!(rows[1].color, None);
        assert_eq!(rows[1].radius_m(), 1_000_000.0);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "bases.csv", "name,lat,missiles\nBase A,30.0,X-1\n");

        let err = load_installations(&path).unwrap_err();
        assert!(
            matches!(err, RangemapError::MissingColumn { column: "lon", .. }),
            "expected MissingColumn for 'lon', got {err:?}"
        );
    }

    #[test]
    fn missing_missiles_column_is_allowed() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "bases.csv", "name,lat,lon\nBase A,30.0,114.0\n");

        let rows = load_installations(&path).unwrap();
        assert_eq!(rows[0].missiles, "");
    }

    #[test]
    fn unreadable_table_is_fatal() {
        let err = load_installations(Path::new("/nonexistent/bases.csv")).unwrap_err();
        assert!(matches!(err, RangemapError::Table { .. }));
    }

    #[test]
    fn malformed_row_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path =
            write_table(&dir, "bases.csv", "name,lat,lon,missiles\nBase A,north,114.0,X-1\n");

        let err = load_installations(&path).unwrap_err();
        assert!(matches!(err, RangemapError::Table { .. }));
    }

    #[test]
    fn store_loads_both_tables() {
        let dir = TempDir::new().unwrap();
        let bases = write_table(&dir, "bases.csv", "name,lat,lon,missiles\nBase A,30.0,114.0,X-1\n");
        let ranges = write_table(
            &dir,
            "ranges.csv",
            "missile_code,label,category,radius_km,color\nX-1,X-1 short,SRBM,500,red\n",
        );

        let store = RecordStore::load(&bases, &ranges).unwrap();
        assert_eq!(store.installations().len(), 1);
        assert_eq!(store.ranges().len(), 1);
    }
}
