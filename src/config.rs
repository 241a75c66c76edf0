//! Evaluation configuration
//!
//! Parameters for a run. Built from command-line arguments, optionally on top
//! of a JSON config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{LengthPolicy, DEFAULT_EXTENSION, TARGET_SAMPLE_RATE};
use crate::error::{EvalError, Result};

/// Everything an evaluation run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Reference recording every candidate is compared against
    pub reference: PathBuf,
    /// Directory holding the candidate recordings
    pub candidates_dir: PathBuf,
    /// Sample rate all buffers are brought to (default: 44100)
    #[serde(default = "default_sample_rate")]
    pub target_sample_rate: u32,
    /// File name suffix selecting candidates (default: ".wav")
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Handling of reference/candidate length differences (default: strict)
    #[serde(default)]
    pub length_policy: LengthPolicy,
}

fn default_sample_rate() -> u32 {
    TARGET_SAMPLE_RATE
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl EvalConfig {
    /// Create a config with default rate, extension and length policy
    pub fn new(reference: impl Into<PathBuf>, candidates_dir: impl Into<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            candidates_dir: candidates_dir.into(),
            target_sample_rate: default_sample_rate(),
            extension: default_extension(),
            length_policy: LengthPolicy::default(),
        }
    }

    /// Set the target sample rate
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.target_sample_rate = sample_rate;
        self
    }

    /// Set the candidate file suffix
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the length policy
    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Load a config from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EvalError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config: EvalConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Reject settings no run could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.target_sample_rate == 0 {
            return Err(EvalError::InvalidConfig {
                reason: "target sample rate must be greater than 0".to_string(),
            });
        }

        if self.extension.is_empty() {
            return Err(EvalError::InvalidConfig {
                reason: "candidate extension must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
