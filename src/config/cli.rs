//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// threadsum - sum random samples on worker threads and report the largest sum
///
/// Every option is optional. Values given here override the TOML file passed
/// with `--config`, which in turn overrides the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "threadsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short = 'c', long, env = "THREADSUM_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    // === Workload Options ===
    /// Number of worker threads [default: 10]
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Samples summed by each worker [default: 100]
    #[arg(short = 'n', long)]
    pub samples: Option<u64>,

    /// Smallest sample value, inclusive [default: 1]
    #[arg(long)]
    pub min: Option<u32>,

    /// Largest sample value, inclusive [default: 1000]
    #[arg(long)]
    pub max: Option<u32>,

    /// Base seed for a reproducible run (per-worker seeds derive from it)
    #[arg(long)]
    pub seed: Option<u64>,

    // === Output Options ===
    /// Write a JSON report to FILE
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub json_pretty: bool,

    /// Append aggregate statistics (total, mean, spread) to the report
    #[arg(long)]
    pub summary: bool,

    /// Do not print the console report
    #[arg(short = 'q', long)]
    pub quiet: bool,

    // === Runtime Options ===
    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
