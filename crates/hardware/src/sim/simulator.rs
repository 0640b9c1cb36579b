//! Simulator: feeds access patterns through prefetchers and collects results.
//!
//! The simulator owns the configuration, builds a fresh prefetcher for every
//! (pattern, prefetcher) pair, and performs look-ahead hit scoring for
//! prefetchers that cannot score themselves.

use tracing::{debug, info, warn};

use crate::common::{Address, PrefetchError};
use crate::config::{AccessPattern, Config, PrefetcherKind};
use crate::core::{HitScoring, Prefetcher};
use crate::stats::{PrefetchStats, RunRecord, SuiteResults};

/// Top-level simulator: configuration plus the run loop.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    /// Prefetcher parameters and pattern suite.
    pub config: Config,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Feeds `addresses` through `prefetcher` in order.
    ///
    /// For [`HitScoring::Lookahead`] prefetchers, a prefetch issued at step
    /// `i` is confirmed when it equals the address at step `i + 1`.
    ///
    /// # Returns
    ///
    /// A snapshot of the prefetcher's statistics after the last access.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first access the prefetcher rejects.
    pub fn drive(
        prefetcher: &mut dyn Prefetcher,
        addresses: &[Address],
    ) -> Result<PrefetchStats, PrefetchError> {
        let lookahead = prefetcher.scoring() == HitScoring::Lookahead;
        debug!(
            prefetcher = prefetcher.name(),
            accesses = addresses.len(),
            lookahead,
            "driving stream"
        );
        for (i, &address) in addresses.iter().enumerate() {
            let issued = prefetcher.access(address)?;
            if lookahead && issued.is_some() && issued == addresses.get(i + 1).copied() {
                prefetcher.report_prefetch_hit();
            }
        }
        Ok(*prefetcher.stats())
    }

    /// Runs a single pattern through a freshly built prefetcher.
    ///
    /// # Errors
    ///
    /// Returns the first access the prefetcher rejects.
    pub fn run_one(
        &self,
        kind: PrefetcherKind,
        pattern: &AccessPattern,
    ) -> Result<PrefetchStats, PrefetchError> {
        let addresses = pattern.generate(self.config.simulation.seed);
        let mut prefetcher = kind.build(&self.config);
        Self::drive(prefetcher.as_mut(), &addresses)
    }

    /// Runs every configured pattern through every configured prefetcher.
    ///
    /// A failed run is logged and recorded, and the suite continues.
    pub fn run(&self) -> SuiteResults {
        let mut results = SuiteResults::default();
        for pattern in &self.config.simulation.patterns {
            for &kind in &self.config.prefetchers {
                let record = match self.run_one(kind, pattern) {
                    Ok(stats) => {
                        info!(
                            pattern = pattern.name(),
                            prefetcher = kind.name(),
                            hits = stats.hits,
                            requests = stats.requests,
                            accuracy = stats.accuracy(),
                            "run complete"
                        );
                        RunRecord {
                            pattern: pattern.name().to_string(),
                            prefetcher: kind.name().to_string(),
                            stats: Some(stats),
                            error: None,
                        }
                    }
                    Err(e) => {
                        warn!(
                            pattern = pattern.name(),
                            prefetcher = kind.name(),
                            error = %e,
                            "run failed, skipping"
                        );
                        RunRecord {
                            pattern: pattern.name().to_string(),
                            prefetcher: kind.name().to_string(),
                            stats: None,
                            error: Some(e.to_string()),
                        }
                    }
                };
                results.push(record);
            }
        }
        results
    }
}
