//! Common utilities and types used throughout the prefetcher simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Address Types:** A strong type for observed memory addresses.
//! 2. **Error Handling:** Prefetch and configuration error types.

/// Address type definitions.
pub mod addr;

/// Error types.
pub mod error;

pub use addr::Address;
pub use error::{ConfigError, PrefetchError};
