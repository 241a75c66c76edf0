//! Error handling for mse-eval
//!
//! Every failure is terminal for the run. Errors carry the path they relate
//! to and, for decode failures, the untranslated `hound` error as the source.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;

/// Main error type for evaluation operations
#[derive(Error, Debug)]
pub enum EvalError {
    // Precondition violations
    #[error("Audio file not found. Looked for {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Audio folder not found. Looked for {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    // Decoding
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // Comparison
    #[error("Length mismatch: reference has {reference} samples, candidate has {candidate}")]
    LengthMismatch { reference: usize, candidate: usize },

    #[error("Audio contains no samples")]
    EmptyAudio,

    // Configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EvalError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            EvalError::FileNotFound { .. } => "FILE_NOT_FOUND",
            EvalError::DirectoryNotFound { .. } => "DIRECTORY_NOT_FOUND",
            EvalError::Decode { .. } => "DECODE_ERROR",
            EvalError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            EvalError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            EvalError::EmptyAudio => "EMPTY_AUDIO",
            EvalError::InvalidConfig { .. } => "INVALID_CONFIG",
            EvalError::Io(_) => "IO_ERROR",
            EvalError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            EvalError::FileNotFound { .. } => vec![
                "Check the reference path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            EvalError::DirectoryNotFound { .. } => vec![
                "Check the candidates directory path is correct",
                "Create the directory and render the test files into it",
            ],
            EvalError::Decode { .. } => vec![
                "Check if the file plays in another application",
                "The file may be corrupted - try re-exporting from source",
            ],
            EvalError::UnsupportedFormat { .. } => vec![
                "Convert to 8, 16, 24 or 32-bit PCM, or 32-bit float WAV",
            ],
            EvalError::LengthMismatch { .. } => vec![
                "Render candidates with the same length as the reference",
                "Use --length-policy truncate to compare the common prefix",
                "Use --length-policy zero-pad to pad the shorter buffer with silence",
            ],
            _ => vec![],
        }
    }
}
