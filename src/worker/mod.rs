//! Worker implementation
//!
//! A worker draws a fixed number of samples from its own distribution and sums
//! them into a 64-bit accumulator. Each worker owns its random source and its
//! accumulator; the only thing that leaves the worker is the final
//! [`WorkerResult`], moved out when the worker is consumed by [`Worker::run`].
//!
//! # Example
//!
//! ```
//! use threadsum::worker::{Worker, WorkerConfig};
//!
//! let config = WorkerConfig { id: 0, samples: 100, min: 1, max: 1000 };
//! let result = Worker::seeded(config, 42).run();
//!
//! assert_eq!(result.id, 0);
//! assert!(result.sum >= 100 && result.sum <= 100_000);
//! ```

use crate::distribution::{uniform::UniformDistribution, Distribution};
use crate::util::seed;
use log::debug;
use std::time::{Duration, Instant};

/// Immutable per-worker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Worker identifier (0, 1, 2, ...)
    pub id: usize,
    /// Number of samples to draw and sum
    pub samples: u64,
    /// Smallest sample value (inclusive)
    pub min: u32,
    /// Largest sample value (inclusive)
    pub max: u32,
}

impl WorkerConfig {
    /// Smallest and largest sum this worker can produce
    pub fn sum_bounds(&self) -> (u64, u64) {
        (
            self.samples.saturating_mul(u64::from(self.min)),
            self.samples.saturating_mul(u64::from(self.max)),
        )
    }
}

/// Outcome of a single worker run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerResult {
    pub id: usize,
    /// Sum of all drawn samples
    pub sum: u64,
    /// Number of samples summed
    pub samples: u64,
    /// Wall time spent drawing and summing
    pub elapsed: Duration,
}

/// A unit of concurrent work producing one summed result
///
/// Workers are built on the coordinating thread and moved onto their own
/// thread to run, so everything they hold must be `Send`.
pub struct Worker {
    config: WorkerConfig,
    distribution: Box<dyn Distribution>,
}

impl Worker {
    /// Create a worker seeded from OS entropy, the clock and its id
    pub fn new(config: WorkerConfig) -> Self {
        let distribution = UniformDistribution::from_entropy_with_hint(config.id as u64);
        Self::with_distribution(config, Box::new(distribution))
    }

    /// Create a worker whose seed derives only from `base_seed` and its id
    pub fn seeded(config: WorkerConfig, base_seed: u64) -> Self {
        let distribution =
            UniformDistribution::from_seed_bytes(seed::derived_seed(base_seed, config.id as u64));
        Self::with_distribution(config, Box::new(distribution))
    }

    /// Create a worker with a caller-supplied distribution
    pub fn with_distribution(config: WorkerConfig, distribution: Box<dyn Distribution>) -> Self {
        Self {
            config,
            distribution,
        }
    }

    pub fn id(&self) -> usize {
        self.config.id
    }

    /// Draw every sample, sum them and return the result
    ///
    /// The caller must ensure `samples * max` fits in a `u64`; the config
    /// validator rejects workloads that could overflow.
    pub fn run(mut self) -> WorkerResult {
        let WorkerConfig {
            id,
            samples,
            min,
            max,
        } = self.config;

        debug!("worker #{} starting: {} samples in [{}, {}]", id, samples, min, max);
        let start = Instant::now();

        let mut acc: u64 = 0;
        for _ in 0..samples {
            acc += u64::from(self.distribution.next_value(min, max));
        }

        let elapsed = start.elapsed();
        debug!("worker #{} finished: sum = {} in {:?}", id, acc, elapsed);

        WorkerResult {
            id,
            sum: acc,
            samples,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always returns the same value
    struct ConstantDistribution(u32);

    impl Distribution for ConstantDistribution {
        fn next_value(&mut self, _min: u32, _max: u32) -> u32 {
            self.0
        }
    }

    fn config(id: usize, samples: u64) -> WorkerConfig {
        WorkerConfig {
            id,
            samples,
            min: 1,
            max: 1000,
        }
    }

    #[test]
    fn test_sum_within_bounds() {
        for id in 0..8 {
            let cfg = config(id, 100);
            let (lo, hi) = cfg.sum_bounds();
            let result = Worker::new(cfg).run();
            assert_eq!(result.id, id);
            assert_eq!(result.samples, 100);
            assert!(result.sum >= lo && result.sum <= hi, "sum {} outside [{}, {}]", result.sum, lo, hi);
        }
    }

    #[test]
    fn test_zero_samples_sum_is_zero() {
        let result = Worker::new(config(3, 0)).run();
        assert_eq!(result.sum, 0);
        assert_eq!(result.samples, 0);
    }

    #[test]
    fn test_degenerate_range() {
        let cfg = WorkerConfig {
            id: 0,
            samples: 250,
            min: 4,
            max: 4,
        };
        assert_eq!(Worker::new(cfg).run().sum, 1000);
    }

    #[test]
    fn test_custom_distribution_is_summed() {
        let worker = Worker::with_distribution(config(1, 10), Box::new(ConstantDistribution(7)));
        assert_eq!(worker.id(), 1);
        assert_eq!(worker.run().sum, 70);
    }

    #[test]
    fn test_seeded_workers_reproducible() {
        let a = Worker::seeded(config(2, 500), 99).run();
        let b = Worker::seeded(config(2, 500), 99).run();
        assert_eq!(a.sum, b.sum);
    }

    #[test]
    fn test_seeded_workers_differ_by_id() {
        let sums: Vec<u64> = (0..4)
            .map(|id| Worker::seeded(config(id, 500), 99).run().sum)
            .collect();
        assert!(sums.windows(2).any(|w| w[0] != w[1]), "all workers produced {:?}", sums);
    }

    #[test]
    fn test_entropy_seeded_streams_differ() {
        // Same id, no base seed: entropy and the clock must separate the streams
        let mut a = Worker::new(config(0, 0));
        let mut b = Worker::new(config(0, 0));
        let draws_a: Vec<u32> = (0..8).map(|_| a.distribution.next_value(0, u32::MAX)).collect();
        let draws_b: Vec<u32> = (0..8).map(|_| b.distribution.next_value(0, u32::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_sum_bounds() {
        assert_eq!(config(0, 100).sum_bounds(), (100, 100_000));
        assert_eq!(config(0, 0).sum_bounds(), (0, 0));
    }
}
