//! Advisory username suggestion file.
//! Read at startup, appended on each new submission. Strictly a UI
//! convenience: the store remains the authoritative username list and the
//! file is reconciled against it at session start.

use crate::errors::AppResult;
use log::warn;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Load previously entered usernames. A missing or unreadable file is an
/// empty suggestion list, never an error.
pub fn load(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            if path.exists() {
                warn!("Could not read suggestion file {path:?}: {e}");
            }
            Vec::new()
        }
    }
}

/// Append a username to the suggestion file, creating it if needed.
pub fn append(path: &Path, username: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{username}")?;
    Ok(())
}

/// Merge the advisory local list with the store's authoritative one:
/// union, deduplicated, sorted.
pub fn reconcile(local: Vec<String>, store: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = store.to_vec();
    for name in local {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }
    merged.sort();
    merged.dedup();
    merged
}
