//! Statistics over worker results
//!
//! Workers never share counters while running; everything here operates on
//! the results after the join barrier.

pub mod aggregator;

pub use aggregator::{AggregateStats, ResultAggregator};
