use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{EruptionDataset, EruptionRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A dataset failed to load. No partial dataset is ever produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("parsing {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// File name of the dataset bundled with the crate.
pub const DEFAULT_DATASET: &str = "volcano.json";

/// Directory holding the bundled datasets.
fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load an eruption dataset from `source`, or the bundled default
/// ([`DEFAULT_DATASET`]) when no source is given.
pub fn load(source: Option<&Path>) -> Result<EruptionDataset, LoadError> {
    match source {
        Some(path) => load_file(path),
        None => load_file(&data_dir().join(DEFAULT_DATASET)),
    }
}

/// Load an eruption dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – top-level array of record objects (the primary format)
/// * `.csv`  – header row with the same column names; empty cells stand
///   for absent values
pub fn load_file(path: &Path) -> Result<EruptionDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    log::info!(
        "loaded {} eruption records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Name": "Krakatau",
///     "Country": "Indonesia",
///     "Type": "Caldera",
///     "Year": 1883,
///     "Latitude": -6.102,
///     "Elevation": 813.0,
///     "VEI": 6,
///     "TSU": "tsu",
///     "Deaths": 36417
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<EruptionDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<EruptionRecord> =
        serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(EruptionDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the same column names as the JSON keys.
/// Empty `Year`, `VEI` and `Deaths` cells mean the value is absent; an
/// empty `TSU` cell means no tsunami.
fn load_csv(path: &Path) -> Result<EruptionDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: EruptionRecord = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    Ok(EruptionDataset::from_records(records))
}
