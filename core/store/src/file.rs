//! FILENAME: core/store/src/file.rs
//! PURPOSE: Whole-file read and write of the entries document.
//! CONTEXT: No locking here. Two callers doing read-modify-write on the same
//! path race, and the later write wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::entry::Entry;
use crate::error::StoreError;

/// Read the full collection. A missing file or an empty/whitespace-only file
/// is an empty collection. A document that is not a JSON array is an error;
/// inside the array, records that are not objects are dropped and odd field
/// values are read leniently (see [`Entry::from_value`]).
pub fn read_entries(path: &Path) -> Result<Vec<Entry>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::Io(e)),
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<Value> = serde_json::from_str(&raw).map_err(StoreError::Parse)?;
    let total = records.len();
    let entries: Vec<Entry> = records.iter().filter_map(Entry::from_value).collect();
    if entries.len() < total {
        log::warn!(target: "store", "skipped {} non-object record(s) in {}", total - entries.len(), path.display());
    }
    Ok(entries)
}

/// Copy an unparsable entries file aside as `<name>.bak` before it is replaced.
pub(crate) fn backup_corrupt(path: &Path) -> Result<PathBuf, StoreError> {
    let backup = sibling(path, ".bak");
    fs::copy(path, &backup)?;
    Ok(backup)
}

/// Replace the file with the given collection as pretty-printed JSON.
///
/// The document is written to a sibling temp file and renamed over the
/// target, so readers see either the old or the new collection.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = sibling(path, ".tmp");
    fs::write(&tmp, json.as_bytes())?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::Io(e));
    }
    Ok(())
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
