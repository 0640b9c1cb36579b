//! Error definitions.
//!
//! This module defines the failure modes of the simulator. It provides:
//! 1. **Prefetch Errors:** Raised by a predictor when an access falls outside its address space.
//! 2. **Config Errors:** Raised while reading or deserializing a configuration file.
//!
//! Both integrate with the standard Rust error traits through `thiserror`, so
//! callers propagate them with `?` and report them with `Display`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::Address;

/// Errors raised by a prefetcher while observing an access.
///
/// Every variant is raised before the predictor mutates any state, so a
/// failed access leaves the predictor exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrefetchError {
    /// The address lies outside the configured transition-table bound.
    #[error("address {address} is outside the transition table range [0, {num_addresses})")]
    OutOfRange {
        /// The rejected address.
        address: Address,
        /// The configured exclusive upper bound.
        num_addresses: usize,
    },
}

/// Errors raised while loading a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
