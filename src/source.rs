//! Record sources for the table.
//!
//! The table engine only ever sees an in-memory `Vec` of records. This module
//! provides the [`RecordSource`] trait for whatever supplies them and a JSON
//! file implementation for documents shaped like `{ "data": [ ... ] }`.

use crate::error::{BondGridError, Result, ResultExt};
use crate::types::Instrument;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Anything that can produce a complete record set.
pub trait RecordSource {
    /// Load every record. Sources are read whole; there is no streaming.
    fn load(&self) -> Result<Vec<Instrument>>;

    /// Human-readable description for logs and the status line
    fn describe(&self) -> String;
}

#[derive(Deserialize)]
struct Document {
    data: Vec<Instrument>,
}

/// Parse a dataset document from a string.
pub fn parse_document(content: &str) -> std::result::Result<Vec<Instrument>, serde_json::Error> {
    serde_json::from_str::<Document>(content).map(|doc| doc.data)
}

/// JSON file with a top-level `data` array.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Instrument>> {
        if self.path.as_os_str().is_empty() {
            return Err(BondGridError::Source("No dataset path configured".to_string()));
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read dataset {:?}", self.path))?;

        let records = parse_document(&content).map_err(|e| BondGridError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tracing::info!("Loaded {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load from `source`, degrading to an empty set on failure.
///
/// Returns the records and, on failure, a message for the status line.
pub fn load_or_empty<S: RecordSource + ?Sized>(source: &S) -> (Vec<Instrument>, Option<String>) {
    match source.load() {
        Ok(records) => (records, None),
        Err(e) => {
            tracing::warn!("Failed to load {}: {}", source.describe(), e);
            (Vec::new(), Some(e.to_string()))
        }
    }
}
