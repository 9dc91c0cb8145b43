use anyhow::{Context, Result};
use clap::Parser;
use scansplit::clean::remove_crops;
use scansplit::prompt::Prompter;
use scansplit::{Cli, split_tree};
use std::io;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    if cli.clean {
        let dir = cli.clean_directory(&mut prompter)?;
        let removed = remove_crops(&dir);
        println!("{} generated crop images have been removed from {}.", removed.len(), dir.display());
        return Ok(());
    }

    let config = cli.resolve_config(&mut prompter)?;
    log::debug!("Configuration: {:?}", config);

    let summary = split_tree(&config, &mut io::stdout().lock())?;
    log::info!(
        "{} sheets split into {} images, {} failed",
        summary.reports.len(),
        summary.crops_written(),
        summary.failed.len()
    );

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&summary.reports).context("Failed to serialize report")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write report to: {:?}", path))?;
        println!("Report saved: {:?}", path);
    }

    Ok(())
}
