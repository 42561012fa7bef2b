//! Self-Play Runner for diagonal chess
//!
//! This crate provides infrastructure for:
//! - Playing episodes between two agents through the environment
//! - Collecting shaped rewards and illegal-request statistics per agent
//! - Saving results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! # Random legal mover against the uniform action sampler
//! cargo run -p selfplay -- run random uniform --episodes 100 --seed 7
//!
//! # Re-print a saved run
//! cargo run -p selfplay -- report selfplay_results.json
//! ```

pub mod cli;
mod results;
mod runner;

pub use results::*;
pub use runner::*;

#[derive(thiserror::Error, Debug)]
pub enum SelfPlayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid run config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Env(#[from] diag_env::EnvError),
    #[error("{0}")]
    Usage(String),
}
