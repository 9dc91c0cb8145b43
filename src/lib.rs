//! Scansplit command line front end
//!
//! Walks a directory of scanned sheets and splits each into one file per
//! photograph, or removes previously generated crops.

pub mod clean;
pub mod cli;
pub mod config;
pub mod prompt;
pub mod walker;

pub use cli::Cli;
pub use config::RunConfig;
pub use walker::{RunSummary, split_tree};
