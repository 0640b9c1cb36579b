//! Predictive engine.
//!
//! This module contains the prefetch models and the state they learn:
//! 1. **Prefetchers:** The common `Prefetcher` contract and the Markov and Stride models.
//! 2. **Model state:** The sparse transition table and the access-history window.

/// Prefetcher trait, implementations, and model state.
pub mod prefetch;

pub use self::prefetch::{
    HitScoring, MarkovPrefetcher, PredictorPhase, Prefetcher, StridePrefetcher,
};
