//! Sample value distributions
//!
//! A distribution turns a random source into integer sample values inside an
//! inclusive range. Workers own their distribution outright; nothing here is
//! shared between threads.
//!
//! # Example
//!
//! ```
//! use threadsum::distribution::{Distribution, uniform::UniformDistribution};
//!
//! let mut dist = UniformDistribution::with_seed(7);
//! let value = dist.next_value(1, 1000);
//! assert!((1..=1000).contains(&value));
//! ```

/// Distribution trait for sample generation
///
/// Distributions must be `Send` so a worker can be moved onto its thread.
pub trait Distribution: Send {
    /// Generate the next sample in the inclusive range `[min, max]`
    ///
    /// Callers guarantee `min <= max`. When `min == max` the result is `min`.
    fn next_value(&mut self, min: u32, max: u32) -> u32;
}

pub mod uniform;
