//! Command-line interface for dockerfile-versions
//!
//! Single command: load the manifest, dump it, then update (or check) every
//! target Dockerfile in order.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_manifest, DEFAULT_MANIFEST};
use crate::update::{update_all, Mode, TargetOutcome};

/// Rewrite the autogenerated ENV block of Dockerfiles from versions.yaml
#[derive(Parser)]
#[command(name = "dockerfile-versions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the version manifest
    #[arg(short = 'f', long = "file", value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    file: PathBuf,

    /// Report stale Dockerfiles and exit nonzero instead of rewriting them
    #[arg(long)]
    check: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    execute(&cli)
}

fn execute(cli: &Cli) -> Result<()> {
    let manifest = load_manifest(&cli.file)?;
    let dump = serde_yaml::to_string(&manifest).context("Failed serializing parsed manifest")?;
    println!("Parsed {}:", cli.file.display());
    print!("{dump}");

    let mode = if cli.check { Mode::Check } else { Mode::Write };
    let outcomes = update_all(&manifest, mode)
        .with_context(|| format!("Failed updating Dockerfiles from {}", cli.file.display()))?;

    println!();
    for outcome in &outcomes {
        println!("  {:<9} {}", status_label(outcome, mode), outcome.path.display());
    }

    let stale: Vec<&TargetOutcome> = outcomes.iter().filter(|o| o.changed).collect();
    if mode == Mode::Check && !stale.is_empty() {
        anyhow::bail!(
            "{} of {} Dockerfiles are out of date with {}; rerun without --check",
            stale.len(),
            outcomes.len(),
            cli.file.display()
        );
    }

    Ok(())
}

fn status_label(outcome: &TargetOutcome, mode: Mode) -> &'static str {
    match (outcome.changed, mode) {
        (false, _) => "unchanged",
        (true, Mode::Write) => "updated",
        (true, Mode::Check) => "stale",
    }
}
