//! Listing loader.
//!
//! Reads business listings from a CSV (or JSON) file and normalizes them into
//! [`BusinessRecord`]s, upper-casing state codes. Rows missing a name, city,
//! state or a positive numeric rating are dropped. When the file itself
//! cannot be used, callers fall back to [`sample_records`], an embedded
//! dataset compiled into the binary.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::normalize_phone;
use crate::models::BusinessRecord;

const SAMPLE_CSV: &str = include_str!("../../data/sample_businesses.csv");

/// Columns without which no row can produce a record
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "city", "state", "rating"];

/// Errors that make a listing file unusable as a whole
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Listing file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse JSON {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is missing required columns: {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
}

/// Why a single row was dropped
#[derive(Debug, Clone, PartialEq)]
pub enum RowRejection {
    MissingField(&'static str),
    InvalidRating(String),
    NonPositiveRating(f64),
    Unreadable(String),
}

impl std::fmt::Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowRejection::MissingField(field) => write!(f, "missing {}", field),
            RowRejection::InvalidRating(raw) => write!(f, "non-numeric rating '{}'", raw),
            RowRejection::NonPositiveRating(rating) => write!(f, "rating {} is not positive", rating),
            RowRejection::Unreadable(reason) => write!(f, "unreadable row: {}", reason),
        }
    }
}

/// Outcome of a successful load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<BusinessRecord>,
    pub rejected: usize,
}

impl LoadReport {
    fn push(&mut self, row: usize, outcome: Result<BusinessRecord, RowRejection>) {
        match outcome {
            Ok(record) => self.records.push(record),
            Err(reason) => {
                tracing::debug!("Dropping row {}: {}", row, reason);
                self.rejected += 1;
            }
        }
    }
}

/// One row as it appears in the source, before any validation
#[derive(Debug, Default, Deserialize)]
struct RawBusinessRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    full_address: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    reviews: Option<String>,
    #[serde(default)]
    site: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl RawBusinessRow {
    fn from_json(object: &Map<String, Value>) -> Self {
        let field = |key: &str| object.get(key).and_then(json_text);
        Self {
            name: field("name"),
            phone: field("phone"),
            full_address: field("full_address"),
            city: field("city"),
            postal_code: field("postal_code"),
            state: field("state"),
            rating: field("rating"),
            reviews: field("reviews"),
            site: field("site"),
            category: field("category"),
            kind: field("type"),
        }
    }

    fn into_record(self) -> Result<BusinessRecord, RowRejection> {
        let name = required(self.name, "name")?;
        let city = required(self.city, "city")?;
        let state = required(self.state, "state")?.to_ascii_uppercase();
        let rating = parse_rating(&required(self.rating, "rating")?)?;

        Ok(BusinessRecord {
            name,
            phone: normalize_phone(&text(self.phone)),
            address: text(self.full_address),
            city,
            state,
            postal_code: text(self.postal_code),
            rating,
            reviews: parse_reviews(&text(self.reviews)),
            website: text(self.site),
            category: text(self.category),
            kind: text(self.kind),
        })
    }
}

fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RowRejection> {
    let value = text(value);
    if value.is_empty() {
        Err(RowRejection::MissingField(field))
    } else {
        Ok(value)
    }
}

fn parse_rating(raw: &str) -> Result<f64, RowRejection> {
    let rating: f64 = raw
        .parse()
        .map_err(|_| RowRejection::InvalidRating(raw.to_string()))?;

    if !rating.is_finite() {
        return Err(RowRejection::InvalidRating(raw.to_string()));
    }
    if rating <= 0.0 {
        return Err(RowRejection::NonPositiveRating(rating));
    }
    Ok(rating)
}

/// Review counts arrive as integers, floats ("150.0") or blanks
fn parse_reviews(raw: &str) -> u32 {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

/// Load listings from CSV data. `origin` only labels errors.
pub fn load_csv<R: Read>(reader: R, origin: &Path) -> Result<LoadReport, LoadError> {
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            path: origin.to_path_buf(),
            columns: missing,
        });
    }

    let mut report = LoadReport::default();
    for (index, result) in reader.deserialize::<RawBusinessRow>().enumerate() {
        // +2: 1-indexed plus the header row
        let row = index + 2;
        let outcome = result
            .map_err(|e| RowRejection::Unreadable(e.to_string()))
            .and_then(RawBusinessRow::into_record);
        report.push(row, outcome);
    }

    Ok(report)
}

/// Load listings from a JSON array of row objects
pub fn load_json<R: Read>(reader: R, origin: &Path) -> Result<LoadReport, LoadError> {
    let rows: Vec<Value> = serde_json::from_reader(reader).map_err(|source| LoadError::Json {
        path: origin.to_path_buf(),
        source,
    })?;

    let mut report = LoadReport::default();
    for (index, row) in rows.iter().enumerate() {
        let outcome = match row {
            Value::Object(object) => RawBusinessRow::from_json(object).into_record(),
            other => Err(RowRejection::Unreadable(format!("expected object, found {}", other))),
        };
        report.push(index + 1, outcome);
    }

    Ok(report)
}

/// Load listings from a file. `.json` files are read as JSON, everything
/// else as CSV.
pub fn load_path(path: &Path) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let reader = BufReader::new(file);

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        load_json(reader, path)
    } else {
        load_csv(reader, path)
    }
}

/// The embedded sample dataset, normalized like any other source
pub fn sample_records() -> Vec<BusinessRecord> {
    match load_csv(SAMPLE_CSV.as_bytes(), Path::new("embedded sample")) {
        Ok(report) => report.records,
        Err(e) => {
            tracing::error!("Embedded sample data is unreadable: {}", e);
            Vec::new()
        }
    }
}
