//! Coordinator module
//!
//! Spawns one thread per worker, waits for all of them (join-all barrier) and
//! hands the collected results back as a [`RunReport`].
//!
//! # Example
//!
//! ```
//! use threadsum::coordinator::Coordinator;
//!
//! let report = Coordinator::new(4, 100, 1, 1000).run_all()?;
//!
//! assert_eq!(report.summaries().len(), 4);
//! let (best_id, best_sum) = report.best()?;
//! assert!(report.summaries().contains(&(best_id, best_sum)));
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::WorkloadConfig;
use crate::error::SumError;
use crate::stats::{AggregateStats, ResultAggregator};
use crate::worker::{Worker, WorkerConfig, WorkerResult};
use crate::Result;
use anyhow::Context;
use log::{debug, error};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Orchestrates the workers of a single run
#[derive(Debug, Clone)]
pub struct Coordinator {
    workers: Vec<WorkerConfig>,
    seed: Option<u64>,
}

impl Coordinator {
    /// Build one worker configuration per id in `0..thread_count`
    pub fn new(thread_count: usize, samples_per_thread: u64, min: u32, max: u32) -> Self {
        let workers = (0..thread_count)
            .map(|id| WorkerConfig {
                id,
                samples: samples_per_thread,
                min,
                max,
            })
            .collect();

        Self {
            workers,
            seed: None,
        }
    }

    /// Build from a (validated) workload configuration
    pub fn from_workload(workload: &WorkloadConfig) -> Self {
        let coordinator = Self::new(workload.threads, workload.samples, workload.min, workload.max);
        match workload.seed {
            Some(seed) => coordinator.with_seed(seed),
            None => coordinator,
        }
    }

    /// Derive every worker's seed from `seed` instead of entropy
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Run every worker on its own thread and wait for all of them
    ///
    /// No result is read until every spawned thread has been joined. A worker
    /// that panics is reported as [`SumError::WorkerPanicked`] once the
    /// barrier completes. An inverted range is rejected with
    /// [`SumError::InvalidRange`] before any thread is spawned.
    pub fn run_all(&self) -> Result<RunReport> {
        if let Some(cfg) = self.workers.iter().find(|cfg| cfg.min > cfg.max) {
            return Err(SumError::InvalidRange {
                min: cfg.min,
                max: cfg.max,
            }
            .into());
        }

        let start = Instant::now();

        let mut handles: Vec<(usize, JoinHandle<WorkerResult>)> = Vec::with_capacity(self.workers.len());
        let mut spawn_error = None;

        for &config in &self.workers {
            let worker = match self.seed {
                Some(seed) => Worker::seeded(config, seed),
                None => Worker::new(config),
            };

            let spawned = thread::Builder::new()
                .name(format!("worker-{}", config.id))
                .spawn(move || worker.run())
                .with_context(|| format!("Failed to spawn worker thread #{}", config.id));

            match spawned {
                Ok(handle) => handles.push((config.id, handle)),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        debug!("spawned {} worker threads, waiting for all to finish", handles.len());

        let (aggregator, first_panic) = join_all(handles);
        let elapsed = start.elapsed();

        if let Some(e) = spawn_error {
            return Err(e);
        }
        if let Some(id) = first_panic {
            return Err(SumError::WorkerPanicked { id }.into());
        }

        debug!("all {} workers joined in {:?}", aggregator.num_workers(), elapsed);

        Ok(RunReport { aggregator, elapsed })
    }
}

/// Join every handle; returns the collected results and the lowest panicked id
fn join_all(handles: Vec<(usize, JoinHandle<WorkerResult>)>) -> (ResultAggregator, Option<usize>) {
    let mut aggregator = ResultAggregator::new();
    let mut first_panic = None;

    for (id, handle) in handles {
        match handle.join() {
            Ok(result) => aggregator.add_worker(result),
            Err(_) => {
                error!("worker #{} panicked", id);
                first_panic.get_or_insert(id);
            }
        }
    }

    (aggregator, first_panic)
}

/// Results of a completed run
#[derive(Debug)]
pub struct RunReport {
    aggregator: ResultAggregator,
    elapsed: Duration,
}

impl RunReport {
    /// `(id, sum)` of every worker, in id order
    pub fn summaries(&self) -> Vec<(usize, u64)> {
        self.aggregator.summaries()
    }

    /// `(id, sum)` of the worker with the largest sum, lowest id on ties
    pub fn best(&self) -> Result<(usize, u64)> {
        self.aggregator
            .best()
            .ok_or_else(|| SumError::NoWorkers.into())
    }

    /// Per-worker results, in id order
    pub fn results(&self) -> impl Iterator<Item = &WorkerResult> {
        self.aggregator.results()
    }

    pub fn aggregate(&self) -> AggregateStats {
        self.aggregator.aggregate()
    }

    /// Wall time from first spawn to last join
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
