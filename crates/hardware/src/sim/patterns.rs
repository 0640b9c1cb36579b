//! Synthetic address-sequence generators.
//!
//! Pure functions that materialize access streams for the simulator. Random
//! streams take an explicit seed so every run is reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::Address;
use crate::config::AccessPattern;

/// Ascending addresses `0..length`.
pub fn sequential(length: usize) -> Vec<Address> {
    (0..length as u64).map(Address).collect()
}

/// Addresses `start + i * stride` for `i` in `0..length`.
///
/// Addresses wrap at the top of the `u64` range.
pub fn strided(start: u64, stride: u64, length: usize) -> Vec<Address> {
    (0..length as u64)
        .map(|i| Address(start.wrapping_add(i.wrapping_mul(stride))))
        .collect()
}

/// Adjacent pairs `2j, 2j + 1` for `j` in `0..length / 2`.
///
/// An odd `length` yields `length - 1` addresses.
pub fn interleaved(length: usize) -> Vec<Address> {
    (0..(length / 2) as u64)
        .flat_map(|j| [Address(2 * j), Address(2 * j + 1)])
        .collect()
}

/// `length` addresses drawn uniformly from `[0, length)`.
///
/// # Arguments
///
/// * `length` - Number of addresses, and the exclusive upper bound on their values.
/// * `seed` - Seed for the generator; equal seeds yield equal sequences.
pub fn random(length: usize, seed: u64) -> Vec<Address> {
    if length == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = length as u64;
    (0..length).map(|_| Address(rng.gen_range(0..bound))).collect()
}

/// `pattern` concatenated `repetitions` times.
pub fn repeated(pattern: &[Address], repetitions: usize) -> Vec<Address> {
    pattern.repeat(repetitions)
}

impl AccessPattern {
    /// Materializes the address sequence this pattern describes.
    ///
    /// # Arguments
    ///
    /// * `default_seed` - Seed for random patterns that do not carry their own.
    pub fn generate(&self, default_seed: u64) -> Vec<Address> {
        match self {
            Self::Sequential { length } => sequential(*length),
            Self::Strided {
                start,
                stride,
                length,
            } => strided(*start, *stride, *length),
            Self::Interleaved { length } => interleaved(*length),
            Self::Random { length, seed } => random(*length, seed.unwrap_or(default_seed)),
            Self::Repeated {
                pattern,
                repetitions,
            } => repeated(pattern, *repetitions),
            Self::Custom { addresses, .. } => addresses.clone(),
        }
    }
}
