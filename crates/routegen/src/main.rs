//! routegen — one-shot driving-route fixture generator.
//!
//! Reads a daily-routine configuration, synthesizes a deterministic route
//! for every leg of every driver's day, and writes one JSON record per leg,
//! skipping records that already exist.  Re-running against the same output
//! directory is a no-op.

mod generate;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rg_config::load_routines;
use rg_output::JsonFileStore;

use generate::generate_all;

#[derive(Parser)]
#[command(name = "routegen", about = "Generate mock driving-route fixtures for configured drivers")]
struct Cli {
    /// Daily-routine configuration file.
    #[arg(long, default_value = "daily-routines.json")]
    config: PathBuf,

    /// Directory receiving one {route}.json file per leg.
    #[arg(long, default_value = "routes/daily")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let routines = load_routines(&cli.config)
        .with_context(|| format!("reading configuration {}", cli.config.display()))?;
    log::info!(
        "loaded {} daily routines from {}",
        routines.len(),
        cli.config.display()
    );

    let mut store = JsonFileStore::new(&cli.output_dir)
        .with_context(|| format!("opening output directory {}", cli.output_dir.display()))?;

    let summary = generate_all(&routines, &mut store);
    log::info!(
        "done: {} routes written, {} already existed, {} drivers",
        summary.written,
        summary.skipped,
        summary.drivers
    );

    if summary.failed_drivers > 0 {
        anyhow::bail!("{} of {} drivers failed", summary.failed_drivers, summary.drivers);
    }
    Ok(())
}
