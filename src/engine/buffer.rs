//! Mono Audio Buffer
//!
//! Provides the single-channel buffer every loaded recording is reduced to.

// ============================================================================
// Constants
// ============================================================================

/// Sample rate every buffer is brought to before comparison (44.1kHz)
pub const TARGET_SAMPLE_RATE: u32 = 44100;

// ============================================================================
// MonoBuffer
// ============================================================================

/// A single channel of `f32` samples at a known sample rate.
///
/// Buffers are built by the loader and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MonoBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl MonoBuffer {
    /// Create a buffer from existing samples
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Get a reference to the samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the buffer and return its samples
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

impl AsRef<[f32]> for MonoBuffer {
    fn as_ref(&self) -> &[f32] {
        &self.samples
    }
}
