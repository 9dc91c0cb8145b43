//! Directory traversal and the per-file split loop

use crate::config::RunConfig;
use anyhow::Result;
use log::{error, warn};
use scansplit_core::is_generated_crop;
use scansplit_cv::{SheetSplitter, SplitReport};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Totals for one run over a tree
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<SplitReport>,
    /// Sheets that could not be loaded or fully written
    pub failed: Vec<PathBuf>,
}

impl RunSummary {
    pub fn crops_written(&self) -> usize {
        self.reports.iter().map(SplitReport::detected).sum()
    }
}

/// Source sheets match one of the suffixes. With `skip_generated`, names
/// carrying the crop marker are left out.
pub fn is_eligible(file_name: &str, extensions: &[String], skip_generated: bool) -> bool {
    extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
        && !(skip_generated && is_generated_crop(file_name))
}

/// Eligible files below `root`, in file name order per directory.
pub fn eligible_files(root: &Path, extensions: &[String], skip_generated: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| is_eligible(name, extensions, skip_generated))
        {
            files.push(entry.into_path());
        }
    }

    files
}

/// Split every eligible sheet under the configured directory.
///
/// Prints one `{path}: {n} images detected` line per sheet to `out`. A sheet
/// that fails is reported and skipped; the walk always finishes.
pub fn split_tree<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    let splitter = SheetSplitter::new(config.split.clone());
    let mut summary = RunSummary::default();

    let files = eligible_files(&config.target_directory, &config.extensions, config.skip_generated);
    for path in files {
        match splitter.split_file(&path) {
            Ok(report) => {
                writeln!(out, "{}: {} images detected", path.display(), report.detected())?;
                summary.reports.push(report);
            }
            Err(e) => {
                error!("{}: {:#}", path.display(), anyhow::Error::from(e));
                writeln!(out, "{}: Error: could not be split", path.display())?;
                summary.failed.push(path);
            }
        }
    }

    Ok(summary)
}
