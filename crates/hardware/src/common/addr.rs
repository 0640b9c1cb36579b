//! Address type definitions.
//!
//! This module defines the strong address type observed by every prefetcher. It provides:
//! 1. **Type Safety:** Keeps addresses apart from counts, strides, and indices at compile time.
//! 2. **Stride Arithmetic:** Signed distances between addresses and checked offsetting.
//! 3. **Serialization:** Transparent `serde` support so config files carry plain integers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A memory address in the simulated access stream.
///
/// Addresses are opaque, non-negative identifiers for memory locations.
/// Prefetchers never dereference them; they only compare, count, and
/// extrapolate them.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address(pub u64);

impl Address {
    /// Creates a new address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    ///
    /// # Returns
    ///
    /// A new `Address` wrapping the provided value.
    #[inline]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns the signed distance from `prev` to `self`.
    ///
    /// The difference is computed in two's complement, so any pair of
    /// addresses less than 2^63 apart yields the exact stride.
    ///
    /// # Arguments
    ///
    /// * `prev` - The earlier address in the stream.
    #[inline]
    pub const fn stride_from(&self, prev: Self) -> i64 {
        self.0.wrapping_sub(prev.0) as i64
    }

    /// Offsets this address by a signed stride.
    ///
    /// # Arguments
    ///
    /// * `stride` - The signed distance to add.
    ///
    /// # Returns
    ///
    /// The resulting address, or `None` if it would leave the `u64` range.
    #[inline]
    pub const fn offset(&self, stride: i64) -> Option<Self> {
        match self.0.checked_add_signed(stride) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }
}

impl From<u64> for Address {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
