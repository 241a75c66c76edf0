//! mse-eval - Reference vs. candidate audio comparison
//!
//! Scores a set of candidate recordings against one reference recording by
//! mean squared error over their samples.
//!
//! # Pipeline
//!
//! - Load the reference as a mono buffer at the target sample rate
//! - Discover candidate files in a directory, sorted by file name
//! - Load each candidate the same way and compare it to the reference
//! - Report one result per candidate, in discovery order

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::EvalConfig;
pub use error::{EvalError, Result};
pub use pipeline::{evaluate, Comparison};
