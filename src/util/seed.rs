//! Per-worker seed derivation
//!
//! Every worker gets its own 256-bit seed for a xoshiro256++ generator. In the
//! normal case the seed mixes OS entropy, a nanosecond clock reading and the
//! worker index, so two workers started in the same nanosecond still diverge
//! and two runs of the program never repeat. With a base seed the OS entropy
//! and the clock are left out and runs become reproducible.

use rand::rngs::OsRng;
use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// 64-bit golden ratio increment used by SplitMix64
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed length for `Xoshiro256PlusPlus`
pub const SEED_LEN: usize = 32;

/// SplitMix64 output function
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Absorb a list of words and squeeze out a 256-bit seed
///
/// Any change to any input word changes every output word.
pub fn mix_words(words: &[u64]) -> [u8; SEED_LEN] {
    let mut state = 0u64;
    for &word in words {
        state = mix64(state ^ word).wrapping_add(GOLDEN_GAMMA);
    }

    let mut seed = [0u8; SEED_LEN];
    for chunk in seed.chunks_exact_mut(8) {
        state = state.wrapping_add(GOLDEN_GAMMA);
        chunk.copy_from_slice(&mix64(state).to_le_bytes());
    }
    seed
}

/// Current wall clock in nanoseconds since the Unix epoch
///
/// Only used as seed material, so a clock set before 1970 simply reads 0.
pub fn clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Seed from OS entropy, the clock and a per-worker hint
pub fn entropy_seed(hint: u64) -> [u8; SEED_LEN] {
    let now = clock_nanos();
    let words = [
        OsRng.next_u64(),
        now,
        hint,
        OsRng.next_u64(),
        now ^ 0x9E37_79B9,
    ];
    mix_words(&words)
}

/// Reproducible seed from a base seed and a per-worker hint
pub fn derived_seed(base: u64, hint: u64) -> [u8; SEED_LEN] {
    mix_words(&[base, hint, base ^ GOLDEN_GAMMA])
}
