//! Test helpers for staging request documents on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Destination catalogue shipped with the workspace.
pub(super) const CATALOGUE: &str = include_str!("../../../data/destinations.json");

/// A preferences body that favours Goa out of the shipped catalogue.
pub(super) const BEACH_PREFERENCES: &str = r#"{
    "interests": ["beach", "nightlife"],
    "budget": 40000,
    "travelDates": { "start": "2024-12-10" }
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents).expect("write fixture file");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Wrap [`BEACH_PREFERENCES`] and the shipped catalogue into a full request.
pub(super) fn beach_request() -> String {
    format!(r#"{{"preferences": {BEACH_PREFERENCES}, "destinations": {CATALOGUE}}}"#)
}

pub(super) fn parse_output(bytes: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(bytes).expect("stdout utf-8");
    assert!(text.ends_with('\n'), "payload should end with a newline");
    serde_json::from_str(text).expect("output should be JSON")
}
