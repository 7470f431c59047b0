//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! With no arguments the built-in defaults reproduce the classic run:
//! 10 workers, 100 samples each, values in `[1, 1000]`.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Upper bound on worker threads accepted by the validator
pub const MAX_THREADS: usize = 4096;

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// What every worker does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of worker threads
    pub threads: usize,
    /// Samples drawn and summed by each worker
    pub samples: u64,
    /// Smallest value a sample may take (inclusive)
    pub min: u32,
    /// Largest value a sample may take (inclusive)
    pub max: u32,
    /// Base seed for reproducible runs; `None` seeds from entropy and the clock
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            threads: 10,
            samples: 100,
            min: 1,
            max: 1000,
            seed: None,
        }
    }
}

impl fmt::Display for WorkloadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} threads x {} samples in [{}, {}]",
            self.threads, self.samples, self.min, self.max
        )?;
        if let Some(seed) = self.seed {
            write!(f, " (seed {})", seed)?;
        }
        Ok(())
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write a JSON report to this path
    pub json_output: Option<PathBuf>,
    /// Pretty-print the JSON report
    pub json_pretty: bool,
    /// Append aggregate statistics to the console report
    pub show_summary: bool,
    /// Suppress the console report
    pub quiet: bool,
}

/// Runtime behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Validate configuration and exit without spawning workers
    pub dry_run: bool,
}
