use crate::error::StoreError;
use crate::record_file::{deserialize, serialize};
use core_types::InventoryRow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The result of reading the inventory file.
///
/// Loading never fails the caller. `Missing` and `Corrupt` both mean "start
/// with an empty store"; they are kept apart so callers can tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<InventoryRow>),
    Missing,
    Corrupt(String),
}

impl LoadOutcome {
    pub fn into_rows(self) -> Vec<InventoryRow> {
        match self {
            LoadOutcome::Loaded(rows) => rows,
            LoadOutcome::Missing | LoadOutcome::Corrupt(_) => Vec::new(),
        }
    }
}

/// Reads every row from the inventory file at `path`.
pub fn load(path: &Path) -> LoadOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No inventory file yet; starting empty.");
            return LoadOutcome::Missing;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Inventory file could not be read; starting empty.");
            return LoadOutcome::Corrupt(e.to_string());
        }
    };

    match deserialize(&bytes) {
        Ok(rows) => {
            tracing::info!(path = %path.display(), rows = rows.len(), "Inventory loaded.");
            LoadOutcome::Loaded(rows)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Inventory file is corrupt; starting empty.");
            LoadOutcome::Corrupt(e.to_string())
        }
    }
}

/// Overwrites the inventory file at `path` with `rows`, creating the parent
/// directory if needed.
pub fn save(path: &Path, rows: &[InventoryRow]) -> Result<(), StoreError> {
    let bytes = serialize(rows)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Inventory saved.");
    Ok(())
}
