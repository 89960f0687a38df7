//! HBnB console
//!
//! Interactive shell over the HBnB record registry. Every mutation is
//! flushed to the JSON storage file before the next prompt.
//!
//! Usage:
//!   hbnb --file file.json
//!   echo 'create User' | hbnb
//!
//! Logs go to stderr; stdout carries only the prompt and command output.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hbnb_console::Console;
use hbnb_storage::{DEFAULT_FILE_PATH, FileStorage, Storage};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hbnb")]
#[command(about = "Command interpreter for HBnB records")]
struct Args {
    /// JSON file the records are loaded from and flushed to
    #[arg(short, long, default_value = DEFAULT_FILE_PATH)]
    file: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let storage = FileStorage::open(&args.file)
        .with_context(|| format!("Failed to load records from {}", args.file.display()))?;
    info!(
        path = %args.file.display(),
        records = storage.all().len(),
        "Console starting"
    );

    let mut console = Console::new(storage, io::stdout().lock());
    console
        .run(io::stdin().lock())
        .context("Console session aborted")?;

    info!("Console exiting");
    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or everything with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
