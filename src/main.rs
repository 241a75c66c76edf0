//! mse-eval CLI
//!
//! Compares candidate recordings against a reference recording.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use mse_eval::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("mse-eval v{}", env!("CARGO_PKG_VERSION"));

    commands::run(&cli).context("evaluation failed")
}
