//! Markov (Transition-Table) Prefetcher.
//!
//! A first-order Markov model over the address stream. For every observed
//! address it counts which addresses followed it, and on each access it
//! prefetches the most frequent successor of the current address.
//!
//! Hits are scored through the access-history window: a prefetched address
//! that is demanded while still resident counts as a hit. A prefetch that is
//! evicted first stays counted as a request and never becomes a hit.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access()`: O(W + log N + S) where W is the window size, N the number
//!     of distinct addresses, and S the successors of the current address
//! - **Space Complexity:** O(T) where T is the number of distinct transitions
//! - **Best Case:** Repeating sequences (loops over the same data)
//! - **Worst Case:** Streams that never revisit an address (sequential scans)

use tracing::{debug, trace, warn};

use super::history::{AccessHistory, HistoryEntry, Lookup, Origin};
use super::table::TransitionTable;
use super::{HitScoring, PredictorPhase, Prefetcher};
use crate::common::{Address, PrefetchError};
use crate::config::MarkovConfig;
use crate::stats::PrefetchStats;

/// Markov prefetcher state.
#[derive(Clone, Debug)]
pub struct MarkovPrefetcher {
    /// Learned transition counts.
    table: TransitionTable,
    /// Recent demand and prefetched addresses.
    history: AccessHistory,
    /// The previous demand access.
    prev: Option<Address>,
    /// Exclusive upper bound on accepted addresses.
    num_addresses: Option<usize>,
    /// Hit and request counters.
    stats: PrefetchStats,
}

impl MarkovPrefetcher {
    /// Creates a new Markov prefetcher.
    ///
    /// # Arguments
    ///
    /// * `config` - Address bound and history window capacity. A window
    ///   capacity of zero is raised to one.
    pub fn new(config: &MarkovConfig) -> Self {
        if config.history_window_size == 0 {
            warn!("history_window_size of 0 raised to 1");
        }
        Self {
            table: TransitionTable::new(),
            history: AccessHistory::new(config.history_window_size),
            prev: None,
            num_addresses: config.num_addresses,
            stats: PrefetchStats::default(),
        }
    }

    /// Most probable successor of `address` under the current table.
    pub fn most_probable_next_address(&self, address: Address) -> Option<Address> {
        self.table.most_probable_next(address)
    }

    /// The learned transition table.
    pub const fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The access-history window.
    pub const fn history(&self) -> &AccessHistory {
        &self.history
    }

    /// The previous demand access, if any.
    pub const fn previous_address(&self) -> Option<Address> {
        self.prev
    }

    fn check_range(&self, address: Address) -> Result<(), PrefetchError> {
        match self.num_addresses {
            Some(n) if address.val() >= n as u64 => Err(PrefetchError::OutOfRange {
                address,
                num_addresses: n,
            }),
            _ => Ok(()),
        }
    }

    fn note_eviction(&mut self, evicted: Option<HistoryEntry>) {
        if let Some(entry) = evicted.filter(|e| e.origin == Origin::Prefetched) {
            self.stats.record_unused_eviction();
            debug!(address = %entry.address, "prefetch evicted unused");
        }
    }
}

impl Prefetcher for MarkovPrefetcher {
    fn name(&self) -> &'static str {
        "Markov"
    }

    /// Observes a demand access.
    ///
    /// Scores the access against the window, learns the transition from the
    /// previous access, records the access, and prefetches the most probable
    /// successor unless it is already resident.
    ///
    /// # Errors
    ///
    /// Returns [`PrefetchError::OutOfRange`] without changing any state if
    /// `address` is outside the configured bound.
    fn access(&mut self, address: Address) -> Result<Option<Address>, PrefetchError> {
        self.check_range(address)?;
        self.stats.record_access();

        let lookup = self.history.confirm(address);
        if lookup == Lookup::PrefetchHit {
            self.stats.record_hit();
        }

        if let Some(prev) = self.prev {
            let count = self.table.record(prev, address);
            trace!(from = %prev, to = %address, count, "transition");
        }

        let evicted = self.history.record_demand(address);
        self.note_eviction(evicted);

        let issued = match self.table.most_probable_next(address) {
            Some(predicted) if !self.history.contains(predicted) => {
                self.stats.record_request();
                let evicted = self.history.push(HistoryEntry::prefetched(predicted));
                self.note_eviction(evicted);
                debug!(%address, %predicted, "prefetch issued");
                Some(predicted)
            }
            Some(predicted) => {
                trace!(%address, %predicted, "prefetch suppressed, already resident");
                None
            }
            None => None,
        };

        trace!(%address, ?lookup, window = self.history.len(), "access");
        self.prev = Some(address);
        Ok(issued)
    }

    fn stats(&self) -> &PrefetchStats {
        &self.stats
    }

    fn scoring(&self) -> HitScoring {
        HitScoring::Window
    }

    fn phase(&self) -> PredictorPhase {
        match self.prev {
            None => PredictorPhase::Idle,
            Some(_) if self.table.is_empty() => PredictorPhase::Warming,
            Some(_) => PredictorPhase::Predicting,
        }
    }
}
