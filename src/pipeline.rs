//! Evaluation pipeline
//!
//! Loads the reference, discovers the candidates and scores each one in
//! order. The first error ends the run and no partial results are returned.

use std::path::PathBuf;

use log::{debug, info};
use serde::Serialize;

use crate::config::EvalConfig;
use crate::engine::{discover, load_mono, mean_squared_error, LengthPolicy, MonoBuffer};
use crate::error::Result;

/// Score of one candidate against the reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// 1-based position in discovery order
    pub index: usize,
    /// Candidate file
    pub file: PathBuf,
    /// Mean squared error against the reference
    pub mse: f64,
    /// Number of samples the error was averaged over
    pub compared_samples: usize,
}

/// Run a full evaluation
pub fn evaluate(config: &EvalConfig) -> Result<Vec<Comparison>> {
    config.validate()?;

    let reference = load_mono(&config.reference, config.target_sample_rate)?;
    info!(
        "Loaded reference {} ({} samples, {:.2}s)",
        config.reference.display(),
        reference.len(),
        reference.duration_secs()
    );

    let candidates = discover(&config.candidates_dir, &config.extension)?;
    info!(
        "Found {} candidate(s) in {}",
        candidates.len(),
        config.candidates_dir.display()
    );

    let mut comparisons = Vec::with_capacity(candidates.len());
    for (i, path) in candidates.into_iter().enumerate() {
        let candidate = load_mono(&path, config.target_sample_rate)?;
        let comparison = score(i + 1, path, &reference, &candidate, config.length_policy)?;
        debug!(
            "Candidate {} ({}): mse={}",
            comparison.index,
            comparison.file.display(),
            comparison.mse
        );
        comparisons.push(comparison);
    }

    Ok(comparisons)
}

fn score(
    index: usize,
    file: PathBuf,
    reference: &MonoBuffer,
    candidate: &MonoBuffer,
    policy: LengthPolicy,
) -> Result<Comparison> {
    let mse = mean_squared_error(reference.samples(), candidate.samples(), policy)?;
    let compared_samples = policy.compared_len(reference.len(), candidate.len())?;

    Ok(Comparison {
        index,
        file,
        mse,
        compared_samples,
    })
}
