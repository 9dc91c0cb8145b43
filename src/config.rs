//! Run configuration: where to look and how to split

use anyhow::{Context, Result};
use scansplit_cv::SplitConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET_DIRECTORY: &str = "./images/";

/// Complete configuration for one run, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Root of the tree to walk
    pub target_directory: PathBuf,
    /// Eligible file name suffixes, matched case-sensitively
    pub extensions: Vec<String>,
    /// Leave files named like generated crops alone
    pub skip_generated: bool,
    pub split: SplitConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_directory: PathBuf::from(DEFAULT_TARGET_DIRECTORY),
            extensions: vec![".jpg".to_string(), ".jpeg".to_string()],
            skip_generated: true,
            split: SplitConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
