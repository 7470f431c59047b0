//! Domain errors
//!
//! Application plumbing uses `anyhow`; these are the failures that callers may
//! want to match on.

use thiserror::Error;

/// Errors raised while validating a run or collecting worker results
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SumError {
    /// Inclusive range with `min` above `max`
    #[error("invalid range: min ({min}) must not exceed max ({max})")]
    InvalidRange { min: u32, max: u32 },

    #[error("invalid thread count {0} (expected 1..={})", crate::config::MAX_THREADS)]
    InvalidThreadCount(usize),

    /// `samples * max` does not fit the 64-bit accumulator
    #[error("{samples} samples of at most {max} would overflow the 64-bit accumulator")]
    AccumulatorOverflow { samples: u64, max: u32 },

    #[error("worker #{id} panicked before reporting its sum")]
    WorkerPanicked { id: usize },

    #[error("no worker results to report")]
    NoWorkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SumError::InvalidRange { min: 10, max: 1 };
        assert_eq!(err.to_string(), "invalid range: min (10) must not exceed max (1)");

        let err = SumError::WorkerPanicked { id: 3 };
        assert_eq!(err.to_string(), "worker #3 panicked before reporting its sum");

        let err = SumError::InvalidThreadCount(0);
        assert!(err.to_string().starts_with("invalid thread count 0"));
    }

    #[test]
    fn test_error_into_anyhow() {
        let err: anyhow::Error = SumError::NoWorkers.into();
        assert_eq!(err.downcast_ref::<SumError>(), Some(&SumError::NoWorkers));
    }
}
