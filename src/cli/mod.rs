//! CLI Module
//!
//! Command-line interface for the mse-eval binary.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

use crate::engine::LengthPolicy;
use crate::report::ReportFormat;

/// Compare candidate WAV recordings against a reference by mean squared error
#[derive(Parser, Debug)]
#[command(name = "mse-eval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Reference WAV file
    pub reference: Option<PathBuf>,

    /// Directory holding the candidate WAV files
    pub candidates_dir: Option<PathBuf>,

    /// JSON config file; flags given on the command line take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sample rate every buffer is brought to [default: 44100]
    #[arg(short = 'r', long)]
    pub sample_rate: Option<u32>,

    /// File name suffix selecting candidates [default: .wav]
    #[arg(short, long)]
    pub extension: Option<String>,

    /// How to compare buffers of different lengths [default: strict]
    #[arg(short, long, value_enum)]
    pub length_policy: Option<LengthPolicy>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
