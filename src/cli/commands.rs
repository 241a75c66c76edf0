//! CLI Command Implementations
//!
//! Turns parsed arguments into a config, runs the evaluation and writes the
//! report to stdout.

use std::io;

use log::info;

use crate::cli::Cli;
use crate::config::EvalConfig;
use crate::error::{EvalError, Result};
use crate::pipeline::evaluate;
use crate::report::write_report;

/// Build the run config from the optional config file and the flags.
pub fn build_config(cli: &Cli) -> Result<EvalConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Reading config: {}", path.display());
            let mut config = EvalConfig::from_json_file(path)?;
            if let Some(reference) = &cli.reference {
                config.reference = reference.clone();
            }
            if let Some(dir) = &cli.candidates_dir {
                config.candidates_dir = dir.clone();
            }
            config
        }
        None => match (&cli.reference, &cli.candidates_dir) {
            (Some(reference), Some(dir)) => EvalConfig::new(reference, dir),
            _ => {
                return Err(EvalError::InvalidConfig {
                    reason: "a reference file and a candidates directory are required \
                             (or pass --config)"
                        .to_string(),
                })
            }
        },
    };

    if let Some(rate) = cli.sample_rate {
        config.target_sample_rate = rate;
    }
    if let Some(extension) = &cli.extension {
        config.extension = extension.clone();
    }
    if let Some(policy) = cli.length_policy {
        config.length_policy = policy;
    }

    config.validate()?;
    Ok(config)
}

/// Evaluate every candidate and print the report.
pub fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;

    info!(
        "Comparing {} against {}/*{} at {} Hz",
        config.reference.display(),
        config.candidates_dir.display(),
        config.extension,
        config.target_sample_rate
    );

    let comparisons = evaluate(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&comparisons, cli.format, &mut out)?;

    Ok(())
}
