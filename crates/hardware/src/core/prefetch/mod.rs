//! Prefetcher implementations.
//!
//! This module contains the interface shared by every prefetch model and its
//! implementations, together with the structures the models learn into.

/// Access-history window used to score window-based prefetchers.
pub mod history;

/// Markov (transition-table) prefetcher.
pub mod markov;

/// Stride prefetcher (extrapolates the most recent stride).
pub mod stride;

/// Sparse first-order transition table.
pub mod table;

pub use self::history::{AccessHistory, HistoryEntry, Lookup, Origin};
pub use self::markov::MarkovPrefetcher;
pub use self::stride::StridePrefetcher;
pub use self::table::TransitionTable;

use crate::common::{Address, PrefetchError};
use crate::config::{Config, PrefetcherKind};
use crate::stats::PrefetchStats;

/// Where a prefetcher's hits are scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitScoring {
    /// The prefetcher confirms its own prefetches against a history window.
    Window,
    /// The driver compares each issued prefetch with the next address in the
    /// stream and calls [`Prefetcher::report_prefetch_hit`] on a match.
    Lookahead,
}

/// Learning progress of a prefetcher.
///
/// Transitions are driven only by successive accesses; there is no terminal
/// state and no reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictorPhase {
    /// No access observed yet.
    Idle,
    /// At least one access observed, but nothing learned to predict from.
    Warming,
    /// The model holds data it can predict from.
    Predicting,
}

/// Trait for prefetcher implementations.
///
/// Prefetchers observe the demand access stream in order and issue at most
/// one speculative prefetch per access. Each instance owns its state
/// exclusively and is driven by a single simulation run.
pub trait Prefetcher: Send {
    /// Name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Observes a demand access.
    ///
    /// Accesses must be delivered in stream order.
    ///
    /// # Arguments
    ///
    /// * `address` - The address that was accessed.
    ///
    /// # Returns
    ///
    /// The address prefetched in response, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`PrefetchError`] if the prefetcher cannot accept `address`.
    /// A failed access leaves the prefetcher unchanged.
    fn access(&mut self, address: Address) -> Result<Option<Address>, PrefetchError>;

    /// Hit and request counters.
    fn stats(&self) -> &PrefetchStats;

    /// Where this prefetcher's hits are scored.
    fn scoring(&self) -> HitScoring;

    /// Credits one externally confirmed prefetch.
    ///
    /// Only meaningful for [`HitScoring::Lookahead`] prefetchers; window
    /// prefetchers score themselves and ignore external reports.
    fn report_prefetch_hit(&mut self) {}

    /// Current learning phase.
    fn phase(&self) -> PredictorPhase;

    /// Fraction of issued prefetches that were confirmed, `0.0` if none were issued.
    fn accuracy(&self) -> f64 {
        self.stats().accuracy()
    }
}

impl PrefetcherKind {
    /// Builds a fresh prefetcher of this kind.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration supplying per-model parameters.
    pub fn build(self, config: &Config) -> Box<dyn Prefetcher> {
        match self {
            Self::Markov => Box::new(MarkovPrefetcher::new(&config.markov)),
            Self::Stride => Box::new(StridePrefetcher::new()),
        }
    }
}
