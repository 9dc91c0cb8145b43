//! Command line arguments and how they combine with prompts and config files

use crate::config::{DEFAULT_TARGET_DIRECTORY, RunConfig};
use crate::prompt::Prompter;
use anyhow::Result;
use clap::Parser;
use scansplit_core::RegionOrder;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "scansplit")]
#[command(version, about = "Divide scanned images into multiple smaller images", long_about = None)]
pub struct Cli {
    /// Directory to process (prompted for when omitted)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Remove all generated crop images
    #[arg(short, long)]
    pub clean: bool,

    /// Minimum width of a detected image in pixels
    #[arg(short = 'W', long, value_name = "PX")]
    pub min_width: Option<u32>,

    /// Minimum height of a detected image in pixels
    #[arg(short = 'H', long, value_name = "PX")]
    pub min_height: Option<u32>,

    /// JSON configuration file; disables prompting
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number crops top-to-bottom, left-to-right instead of detection order
    #[arg(long)]
    pub reading_order: bool,

    /// Never write EXIF dates into crops
    #[arg(long)]
    pub no_stamp: bool,

    /// Also split files whose names contain the crop marker
    #[arg(long)]
    pub include_crops: bool,

    /// Write a JSON report of every split sheet
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Do not prompt; use defaults for anything not given
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Cli {
    fn interactive(&self) -> bool {
        !self.yes && self.config.is_none()
    }

    /// Target directory for cleanup mode.
    pub fn clean_directory<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None if self.interactive() => prompter.ask_path(
                "Enter the path to your target directory (default = ./images) : ",
                DEFAULT_TARGET_DIRECTORY,
            ),
            None => Ok(self.base_config()?.target_directory),
        }
    }

    /// Flags win over the config file; anything still unset is asked for.
    pub fn resolve_config<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<RunConfig> {
        let mut config = self.base_config()?;
        let interactive = self.interactive();
        let detection = &mut config.split.detection;

        detection.min_width = match self.min_width {
            Some(width) => width,
            None if interactive => prompter.ask_u32(
                &format!("Enter the minimum width of detected image (default = {}):", detection.min_width),
                detection.min_width,
            )?,
            None => detection.min_width,
        };

        detection.min_height = match self.min_height {
            Some(height) => height,
            None if interactive => prompter.ask_u32(
                &format!("Enter the minimum height of detected image (default = {}): ", detection.min_height),
                detection.min_height,
            )?,
            None => detection.min_height,
        };

        if self.reading_order {
            detection.order = RegionOrder::ReadingOrder;
        }
        if self.no_stamp {
            config.split.stamp_dates = false;
        }
        if self.include_crops {
            config.skip_generated = false;
        }

        if let Some(dir) = &self.dir {
            config.target_directory = dir.clone();
        } else if interactive {
            config.target_directory = prompter.ask_path(
                "Enter the path to your target directory (default = ./images) : ",
                DEFAULT_TARGET_DIRECTORY,
            )?;
        }

        Ok(config)
    }

    fn base_config(&self) -> Result<RunConfig> {
        match &self.config {
            Some(path) => RunConfig::from_json_file(path),
            None => Ok(RunConfig::default()),
        }
    }
}
