//! Mean squared error between two sample buffers

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// How to compare buffers of different lengths
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LengthPolicy {
    /// Differing lengths are an error
    #[default]
    Strict,
    /// Compare the common prefix only
    Truncate,
    /// Pad the shorter buffer with silence
    ZeroPad,
}

impl LengthPolicy {
    /// Number of samples the comparison runs over, or an error for `Strict`
    pub fn compared_len(&self, reference: usize, candidate: usize) -> Result<usize> {
        match self {
            LengthPolicy::Strict if reference != candidate => Err(EvalError::LengthMismatch {
                reference,
                candidate,
            }),
            LengthPolicy::Strict | LengthPolicy::Truncate => Ok(reference.min(candidate)),
            LengthPolicy::ZeroPad => Ok(reference.max(candidate)),
        }
    }
}

/// Mean of the squared elementwise differences
///
/// Sums in `f64`. Positions past the end of a buffer read as `0.0`, which
/// only happens under `ZeroPad`.
///
/// # Errors
/// * `LengthMismatch` - Lengths differ under `LengthPolicy::Strict`
/// * `EmptyAudio` - No samples would be compared
pub fn mean_squared_error(reference: &[f32], candidate: &[f32], policy: LengthPolicy) -> Result<f64> {
    let len = policy.compared_len(reference.len(), candidate.len())?;
    if len == 0 {
        return Err(EvalError::EmptyAudio);
    }

    let sample_at = |buf: &[f32], i: usize| buf.get(i).copied().unwrap_or(0.0) as f64;

    let sum_squares: f64 = (0..len)
        .map(|i| {
            let diff = sample_at(reference, i) - sample_at(candidate, i);
            diff * diff
        })
        .sum();

    Ok(sum_squares / len as f64)
}
