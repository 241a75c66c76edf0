//! Audio Engine Module
//!
//! Core building blocks of an evaluation run:
//! - Mono buffer type
//! - WAV loading with mono reduction and resampling
//! - Candidate discovery
//! - Mean squared error comparison

pub mod buffer;
pub mod compare;
pub mod discovery;
pub mod io;

pub use buffer::{MonoBuffer, TARGET_SAMPLE_RATE};
pub use compare::{mean_squared_error, LengthPolicy};
pub use discovery::{discover, DEFAULT_EXTENSION};
pub use io::load_mono;
