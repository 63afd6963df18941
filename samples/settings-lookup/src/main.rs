//! Settings lookup entry point
//!
//! Usage:
//!   settings-lookup --file <path> --key <name> [--key <name> ...] [--default <value>]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use maybe_outcome::carrier::{Maybe, Outcome};
use settings_lookup::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "settings-lookup")]
#[command(about = "Resolve keys from a `key = value` settings file")]
struct Cli {
    /// Settings file to read
    #[arg(long)]
    file: PathBuf,

    /// Key to resolve (repeatable)
    #[arg(long = "key", required = true)]
    keys: Vec<String>,

    /// Value used for keys missing from the file
    #[arg(long)]
    default: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,settings_lookup=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let source = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    tracing::info!(file = %cli.file.display(), "loaded settings file");

    let (settings, rejected) = Settings::parse(&source);
    if !rejected.is_empty() {
        tracing::warn!(count = rejected.len(), "some lines were rejected");
    }

    let fallback = Maybe::from(cli.default.as_deref());
    let mut unresolved = 0_usize;

    for key in &cli.keys {
        match settings.resolve(key, fallback) {
            Outcome::Success(value) => println!("{key} = {value}"),
            Outcome::Failure(error) => {
                tracing::error!(%error, "lookup failed");
                unresolved += 1;
            }
        }
    }

    if unresolved == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!(unresolved, "not every key could be resolved");
        Ok(ExitCode::FAILURE)
    }
}
