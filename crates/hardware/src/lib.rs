//! Memory-access prefetcher accuracy simulator.
//!
//! This crate simulates hardware prefetchers that observe a stream of memory
//! addresses and speculatively prefetch the address they expect next:
//! 1. **Core:** The Markov (transition-table) and Stride prefetchers, the
//!    access-history window, and the learned transition table.
//! 2. **Accounting:** Request, hit, and accuracy bookkeeping.
//! 3. **Simulation:** Seeded access-pattern generators and the run driver.
//! 4. **Reporting:** Suite results as markdown or JSON.

/// Common types (addresses, errors).
pub mod common;
/// Simulator configuration (defaults, prefetcher kinds, access patterns).
pub mod config;
/// Prefetch models and their learned state.
pub mod core;
/// Pattern generators and the simulation driver.
pub mod sim;
/// Prefetch statistics and suite results.
pub mod stats;

/// Strong address type observed by every prefetcher.
pub use crate::common::{Address, PrefetchError};
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Prefetcher contract and implementations.
pub use crate::core::{MarkovPrefetcher, Prefetcher, StridePrefetcher};
/// Top-level run driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
