//! Result aggregation
//!
//! Collects the results of all workers once they have joined and answers the
//! questions the report needs: every `(id, sum)` row in id order, the worker
//! with the largest sum, and totals across all workers.
//!
//! # Example
//!
//! ```
//! use threadsum::stats::aggregator::ResultAggregator;
//! use threadsum::worker::WorkerResult;
//! use std::time::Duration;
//!
//! let mut aggregator = ResultAggregator::new();
//! aggregator.add_worker(WorkerResult { id: 0, sum: 40, samples: 4, elapsed: Duration::ZERO });
//! aggregator.add_worker(WorkerResult { id: 1, sum: 90, samples: 4, elapsed: Duration::ZERO });
//!
//! assert_eq!(aggregator.best(), Some((1, 90)));
//! assert_eq!(aggregator.aggregate().total_sum, 130);
//! ```

use crate::worker::WorkerResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals across all workers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of workers that reported
    pub workers: usize,
    /// Sum of every worker's sum (wider than a single accumulator)
    pub total_sum: u128,
    /// Smallest per-worker sum
    pub min_sum: u64,
    /// Largest per-worker sum
    pub max_sum: u64,
    /// Mean per-worker sum
    pub mean_sum: f64,
    /// Samples drawn across all workers
    pub total_samples: u128,
}

/// Aggregator for worker results, keyed and ordered by worker id
#[derive(Debug, Default)]
pub struct ResultAggregator {
    workers: BTreeMap<usize, WorkerResult>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worker's result, replacing any earlier result with the same id
    pub fn add_worker(&mut self, result: WorkerResult) {
        self.workers.insert(result.id, result);
    }

    /// Get the number of workers
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Results in id order
    pub fn results(&self) -> impl Iterator<Item = &WorkerResult> {
        self.workers.values()
    }

    /// `(id, sum)` for every worker, in id order
    pub fn summaries(&self) -> Vec<(usize, u64)> {
        self.workers.values().map(|r| (r.id, r.sum)).collect()
    }

    /// `(id, sum)` of the worker with the largest sum
    ///
    /// Ties resolve to the lowest id. Returns `None` when no worker reported.
    pub fn best(&self) -> Option<(usize, u64)> {
        self.workers.values().fold(None, |best, r| match best {
            Some((_, sum)) if sum >= r.sum => best,
            _ => Some((r.id, r.sum)),
        })
    }

    /// Totals across all workers
    pub fn aggregate(&self) -> AggregateStats {
        if self.workers.is_empty() {
            return AggregateStats::default();
        }

        let total_sum: u128 = self.workers.values().map(|r| u128::from(r.sum)).sum();
        let total_samples: u128 = self.workers.values().map(|r| u128::from(r.samples)).sum();
        let min_sum = self.workers.values().map(|r| r.sum).min().unwrap_or_default();
        let max_sum = self.workers.values().map(|r| r.sum).max().unwrap_or_default();

        AggregateStats {
            workers: self.workers.len(),
            total_sum,
            min_sum,
            max_sum,
            mean_sum: total_sum as f64 / self.workers.len() as f64,
            total_samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(id: usize, sum: u64) -> WorkerResult {
        WorkerResult {
            id,
            sum,
            samples: 10,
            elapsed: Duration::from_micros(5),
        }
    }

    fn aggregator_with(sums: &[u64]) -> ResultAggregator {
        let mut aggregator = ResultAggregator::new();
        for (id, &sum) in sums.iter().enumerate() {
            aggregator.add_worker(result(id, sum));
        }
        aggregator
    }

    #[test]
    fn test_empty_aggregator() {
        let aggregator = ResultAggregator::new();
        assert_eq!(aggregator.num_workers(), 0);
        assert!(aggregator.summaries().is_empty());
        assert_eq!(aggregator.best(), None);
        assert_eq!(aggregator.aggregate(), AggregateStats::default());
    }

    #[test]
    fn test_summaries_in_id_order() {
        let mut aggregator = ResultAggregator::new();
        aggregator.add_worker(result(2, 30));
        aggregator.add_worker(result(0, 10));
        aggregator.add_worker(result(1, 20));

        assert_eq!(aggregator.summaries(), vec![(0, 10), (1, 20), (2, 30)]);
    }

    #[test]
    fn test_best_picks_largest_sum() {
        let aggregator = aggregator_with(&[500, 900, 100, 899]);
        assert_eq!(aggregator.best(), Some((1, 900)));
    }

    #[test]
    fn test_best_matches_summaries() {
        let aggregator = aggregator_with(&[7, 3, 42, 41, 0, 40]);
        let rows = aggregator.summaries();
        let max = rows.iter().map(|&(_, sum)| sum).max().unwrap();
        let (best_id, best_sum) = aggregator.best().unwrap();
        assert_eq!(best_sum, max);
        assert!(rows.contains(&(best_id, best_sum)));
    }

    #[test]
    fn test_best_tie_resolves_to_lowest_id() {
        let aggregator = aggregator_with(&[5, 9, 9, 9]);
        assert_eq!(aggregator.best(), Some((1, 9)));

        let aggregator = aggregator_with(&[0, 0, 0]);
        assert_eq!(aggregator.best(), Some((0, 0)));
    }

    #[test]
    fn test_add_worker_replaces_same_id() {
        let mut aggregator = aggregator_with(&[1, 2]);
        aggregator.add_worker(result(0, 50));
        assert_eq!(aggregator.num_workers(), 2);
        assert_eq!(aggregator.best(), Some((0, 50)));
    }

    #[test]
    fn test_aggregate() {
        let stats = aggregator_with(&[10, 20, 60]).aggregate();
        assert_eq!(stats.workers, 3);
        assert_eq!(stats.total_sum, 90);
        assert_eq!(stats.min_sum, 10);
        assert_eq!(stats.max_sum, 60);
        assert_eq!(stats.mean_sum, 30.0);
        assert_eq!(stats.total_samples, 30);
    }

    #[test]
    fn test_aggregate_does_not_overflow() {
        let stats = aggregator_with(&[u64::MAX, u64::MAX]).aggregate();
        assert_eq!(stats.total_sum, 2 * u128::from(u64::MAX));
    }
}
