//! Catalog loading
//!
//! Materializes `Vec<HousingRecord>` from a CSV file with a header row or a
//! JSON array of objects. Loading is kept apart from the engine: callers load
//! once and pass the slice to [`crate::recommend::recommend`] as often as they
//! like.
//!
//! Malformed rows (missing identity fields, wrong column count) are skipped
//! and logged; they never abort the load.

pub mod row;

pub use row::{RawRow, IDENTITY_FIELDS, NUMERIC_FIELDS};

use crate::core::HousingRecord;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Supported catalog encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::config(format!(
                "Unsupported catalog format for {} (expected .csv or .json)",
                path.display()
            ))),
        }
    }
}

/// A row that was dropped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line (CSV) or element index + 1 (JSON)
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_loaded: usize,
    pub skipped: Vec<SkippedRow>,
    /// Numeric columns absent from the source header
    pub missing_columns: Vec<String>,
}

impl LoadReport {
    pub fn rows_skipped(&self) -> usize {
        self.skipped.len()
    }

    fn skip(&mut self, line: u64, reason: String) {
        warn!(line, %reason, "Skipping malformed catalog row");
        self.skipped.push(SkippedRow { line, reason });
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedCatalog {
    pub records: Vec<HousingRecord>,
    pub report: LoadReport,
}

/// Load a catalog file, choosing the parser from its extension.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog> {
    let format = CatalogFormat::from_path(path)?;
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);

    let loaded = match format {
        CatalogFormat::Csv => parse_csv(reader)?,
        CatalogFormat::Json => parse_json(reader)?,
    };

    info!(
        path = %path.display(),
        loaded = loaded.report.rows_loaded,
        skipped = loaded.report.rows_skipped(),
        "Loaded catalog"
    );
    Ok(loaded)
}

fn push_row(loaded: &mut LoadedCatalog, line: u64, row: &RawRow) {
    match HousingRecord::from_row(row) {
        Ok(record) => {
            if !record.is_known_region() {
                debug!(line, region = %record.region, "Unrecognised region");
            }
            if !record.is_known_flat_type() {
                debug!(line, flat_type = %record.flat_type, "Unrecognised flat type");
            }
            loaded.records.push(record);
            loaded.report.rows_loaded += 1;
        }
        Err(reason) => loaded.report.skip(line, reason),
    }
}

/// Parse CSV with a header row naming the dataset columns.
pub fn parse_csv<R: Read>(reader: R) -> Result<LoadedCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut loaded = LoadedCatalog::default();

    loaded.report.missing_columns = NUMERIC_FIELDS
        .iter()
        .filter(|field| !headers.iter().any(|h| h == **field))
        .map(|field| field.to_string())
        .collect();
    if !loaded.report.missing_columns.is_empty() {
        warn!(
            columns = ?loaded.report.missing_columns,
            "Catalog is missing numeric columns; they will read as 0"
        );
    }

    for (index, result) in csv_reader.records().enumerate() {
        loaded.report.rows_read += 1;
        // Header occupies line 1.
        let fallback_line = index as u64 + 2;
        match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                let row: RawRow = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, v)| (h.to_string(), v.to_string()))
                    .collect();
                push_row(&mut loaded, line, &row);
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                loaded.report.skip(line, e.to_string());
            }
        }
    }

    Ok(loaded)
}

/// Render a JSON scalar as the text a CSV cell would hold.
fn json_scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse a JSON array of flat objects keyed by dataset column names.
///
/// Values may be strings or numbers; `null` counts as missing.
pub fn parse_json<R: Read>(reader: R) -> Result<LoadedCatalog> {
    let elements: Vec<Value> = serde_json::from_reader(reader)?;
    let mut loaded = LoadedCatalog::default();

    for (index, element) in elements.iter().enumerate() {
        loaded.report.rows_read += 1;
        let line = index as u64 + 1;
        match element {
            Value::Object(map) => {
                let row: RawRow = map
                    .iter()
                    .filter_map(|(k, v)| json_scalar_text(v).map(|text| (k.clone(), text)))
                    .collect();
                push_row(&mut loaded, line, &row);
            }
            other => loaded
                .report
                .skip(line, format!("expected an object, found {}", json_kind(other))),
        }
    }

    Ok(loaded)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "address,town,region,flat_type,floor_area_sqm,remaining_lease,resale_price,bus_within_0.5,school_within_2.0,mall_within_2.0,supermarket_within_0.5,cbd_distance,hawker_distance,park_distance,mrtlrt_distance,LATITUDE,LONGITUDE";

    #[test]
    fn test_parse_csv_reads_rows() {
        let data = format!(
            "{HEADER}\n\
             1 JURONG WEST ST 91,JURONG WEST,West,4 ROOM,92,70,480000,8,10,2,1,14.1,0.3,0.5,0.7,1.34,103.69\n\
             2 TAMPINES ST 11,TAMPINES,East,5 ROOM,110,80,650000,6,12,3,2,12.3,0.4,0.2,0.5,1.35,103.94\n"
        );
        let loaded = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.report.rows_read, 2);
        assert!(loaded.report.missing_columns.is_empty());
        assert_eq!(loaded.records[1].town, "TAMPINES");
        assert_eq!(loaded.records[1].mall_within_2_0, 3.0);
    }

    #[test]
    fn test_parse_csv_skips_short_and_identity_less_rows() {
        let data = format!(
            "{HEADER}\n\
             1 JURONG WEST ST 91,JURONG WEST,West,4 ROOM,92,70,480000,8,10,2,1,14.1,0.3,0.5,0.7,1.34,103.69\n\
             BROKEN,ROW\n\
             ,BEDOK,East,3 ROOM,67,50,330000,5,9,1,1,10.0,0.2,0.4,0.6,1.32,103.93\n"
        );
        let loaded = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.report.rows_read, 3);
        assert_eq!(loaded.report.rows_skipped(), 2);
        assert_eq!(loaded.report.skipped[0].line, 3);
        assert!(loaded.report.skipped[1].reason.contains("address"));
    }

    #[test]
    fn test_parse_csv_reports_missing_numeric_columns() {
        let data = "address,town,region,flat_type,resale_price\nX,Y,West,3 ROOM,1000\n";
        let loaded = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert!(loaded
            .report
            .missing_columns
            .contains(&"floor_area_sqm".to_string()));
        assert_eq!(loaded.records[0].floor_area_sqm, 0.0);
    }

    #[test]
    fn test_parse_json_accepts_numbers_and_strings() {
        let data = r#"[
            {"address": "1 A", "town": "BISHAN", "region": "Central", "flat_type": "4 ROOM",
             "resale_price": 700000, "floor_area_sqm": "95", "bus_within_0.5": 7, "LATITUDE": null},
            {"address": "2 B", "town": "BISHAN", "region": "Central"},
            42
        ]"#;
        let loaded = parse_json(data.as_bytes()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].resale_price, 700_000.0);
        assert_eq!(loaded.records[0].floor_area_sqm, 95.0);
        assert_eq!(loaded.records[0].bus_within_0_5, 7.0);
        assert_eq!(loaded.records[0].latitude, 0.0);
        assert_eq!(loaded.report.rows_skipped(), 2);
        assert_eq!(loaded.report.skipped[1].reason, "expected an object, found a number");
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        let err = parse_json(r#"{"address": "1 A"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("a/b.CSV")).unwrap(),
            CatalogFormat::Csv
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("b.json")).unwrap(),
            CatalogFormat::Json
        );
        assert!(CatalogFormat::from_path(Path::new("b.geojson")).is_err());
    }

    #[test]
    fn test_load_catalog_missing_file_is_io_error() {
        let err = load_catalog(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
