//! Atomic file writes for the blob store
//!
//! Content goes to a `.tmp` sibling first, is synced, then renamed over
//! the destination. A reader sees either the previous blob or the new
//! one, never a torn write.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::GateResult;

/// Atomically replace `path` with `content`
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> GateResult<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Remove `.tmp` leftovers of interrupted writes
///
/// Returns how many files were removed.
pub fn cleanup_temp_files<P: AsRef<Path>>(dir: P) -> GateResult<usize> {
    let dir = dir.as_ref();
    let mut cleaned = 0;

    if !dir.exists() {
        return Ok(0);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "tmp") {
            fs::remove_file(&path)?;
            cleaned += 1;
        }
    }

    Ok(cleaned)
}
