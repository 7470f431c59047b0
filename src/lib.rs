//! threadsum - parallel random-sum workers
//!
//! Spawns a fixed number of worker threads. Each worker draws a batch of
//! uniform random integers from its own uniquely seeded generator and sums
//! them. A coordinator joins every worker and reports which one produced the
//! largest sum.
//!
//! # Architecture
//!
//! - **Workers**: own their RNG and accumulator, share nothing while running
//! - **Coordinator**: fork one thread per worker, join all, aggregate
//! - **Seeding**: OS entropy + clock + worker index, or a base seed for reproducible runs
//! - **Output**: fixed-format console report, optional JSON report

pub mod config;
pub mod coordinator;
pub mod distribution;
pub mod error;
pub mod logger;
pub mod output;
pub mod runner;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{Coordinator, RunReport};
pub use error::SumError;
pub use worker::{Worker, WorkerConfig, WorkerResult};

/// Result type used throughout threadsum
pub type Result<T> = anyhow::Result<T>;
