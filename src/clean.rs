//! Cleanup mode: remove every generated crop below a directory

use log::{info, warn};
use scansplit_core::is_generated_crop;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Delete regular files whose name contains the crop marker. Returns what was removed.
///
/// Unreadable entries and failed deletions are logged and skipped.
pub fn remove_crops(root: &Path) -> Vec<PathBuf> {
    let mut removed = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let is_crop = entry.file_type().is_file()
            && entry.file_name().to_str().is_some_and(is_generated_crop);
        if !is_crop {
            continue;
        }

        match fs::remove_file(entry.path()) {
            Ok(()) => {
                info!("Removed {}", entry.path().display());
                removed.push(entry.into_path());
            }
            Err(e) => warn!("Could not remove {}: {}", entry.path().display(), e),
        }
    }

    removed
}
