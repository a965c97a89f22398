//! Dataset files written to temporary directories

use bondgrid_rs::Instrument;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `records` as a `{ "data": [...] }` document and return its path.
///
/// The file lives as long as the returned `TempDir`.
pub fn write_dataset(records: &[Instrument]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bonds.json");
    let doc = serde_json::json!({ "data": records });
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).expect("write dataset");
    (dir, path)
}

/// Write raw text to a file in a fresh temp dir
pub fn write_raw(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write file");
    (dir, path)
}
