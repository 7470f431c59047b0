//! Uniform random distribution
//!
//! Every value in the inclusive range has equal probability.
//!
//! # Performance
//!
//! Uses the xoshiro256++ PRNG, which is fast and statistically sound for
//! non-cryptographic use.

use super::Distribution;
use crate::util::seed::{self, SEED_LEN};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random distribution over an inclusive integer range
pub struct UniformDistribution {
    rng: Xoshiro256PlusPlus,
}

impl UniformDistribution {
    /// Seed from OS entropy, the clock and `hint`
    ///
    /// Workers pass their index as the hint so concurrent workers never share
    /// a stream.
    pub fn from_entropy_with_hint(hint: u64) -> Self {
        Self::from_seed_bytes(seed::entropy_seed(hint))
    }

    /// Create a new uniform distribution with specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Create from a full 256-bit seed
    pub fn from_seed_bytes(seed: [u8; SEED_LEN]) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_seed(seed),
        }
    }
}

impl Distribution for UniformDistribution {
    #[inline(always)]
    fn next_value(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
