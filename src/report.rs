//! Result reporting
//!
//! Text output is one human-readable line per candidate. JSON output carries
//! the candidate file and sample count as well.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::Comparison;

/// Output format for a report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Format a single text line
///
/// The value keeps its decimal point, so a perfect match prints as `0.0`.
pub fn format_line(index: usize, mse: f64) -> String {
    format!("The mse for the test file number {} is equal to: {:?}", index, mse)
}

/// Write all comparisons in order
///
/// Text format writes nothing for an empty result set. JSON writes `[]`.
pub fn write_report<W: Write>(
    comparisons: &[Comparison],
    format: ReportFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for comparison in comparisons {
                writeln!(out, "{}", format_line(comparison.index, comparison.mse))?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, comparisons)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
