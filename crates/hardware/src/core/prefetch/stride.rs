//! Stride Prefetcher.
//!
//! A prefetcher that extrapolates the most recent stride. Once two strides
//! have been seen it prefetches `address + last_stride` on every access,
//! without confidence counters or duplicate suppression.
//!
//! The prefetcher keeps no history window, so it cannot score itself. The
//! driver compares each issued prefetch against the next address in the
//! stream and reports matches through `report_prefetch_hit`.
//!
//! # Performance
//!
//! - **Time Complexity:** `access()`: O(1)
//! - **Space Complexity:** O(1)
//! - **Best Case:** Constant-stride streams (array traversals)
//! - **Worst Case:** Random or alternating-stride streams

use tracing::{debug, trace};

use super::{HitScoring, PredictorPhase, Prefetcher};
use crate::common::{Address, PrefetchError};
use crate::stats::PrefetchStats;

/// Stride prefetcher state.
#[derive(Clone, Debug, Default)]
pub struct StridePrefetcher {
    /// The previous demand access.
    prev: Option<Address>,
    /// The stride between the two most recent accesses.
    last_stride: Option<i64>,
    /// Whether the most recent access issued a prefetch that can still be confirmed.
    outstanding: bool,
    /// Hit and request counters.
    stats: PrefetchStats,
}

impl StridePrefetcher {
    /// Creates a new Stride prefetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stride between the two most recent accesses.
    pub const fn last_stride(&self) -> Option<i64> {
        self.last_stride
    }

    /// The previous demand access, if any.
    pub const fn previous_address(&self) -> Option<Address> {
        self.prev
    }
}

impl Prefetcher for StridePrefetcher {
    fn name(&self) -> &'static str {
        "Stride"
    }

    /// Observes a demand access.
    ///
    /// From the third access onward, issues a prefetch for
    /// `address + last_stride` using the stride recorded *before* this
    /// access, then records the new stride.
    ///
    /// The request is counted even when the target would leave the address
    /// range; such a prefetch has no target and can never be confirmed.
    fn access(&mut self, address: Address) -> Result<Option<Address>, PrefetchError> {
        self.stats.record_access();
        self.outstanding = false;
        let mut issued = None;

        if let Some(prev) = self.prev {
            let current = address.stride_from(prev);
            if let Some(stride) = self.last_stride {
                self.stats.record_request();
                issued = address.offset(stride);
                self.outstanding = issued.is_some();
                debug!(%address, stride, target = ?issued, "prefetch issued");
            }
            self.last_stride = Some(current);
            trace!(%address, stride = current, "stride");
        }

        self.prev = Some(address);
        Ok(issued)
    }

    fn stats(&self) -> &PrefetchStats {
        &self.stats
    }

    fn scoring(&self) -> HitScoring {
        HitScoring::Lookahead
    }

    /// Credits the prefetch issued by the most recent access.
    ///
    /// At most one hit is credited per issued prefetch; reports with no
    /// outstanding prefetch are ignored.
    fn report_prefetch_hit(&mut self) {
        if self.outstanding {
            self.outstanding = false;
            self.stats.record_hit();
        } else {
            trace!("hit report ignored, no outstanding prefetch");
        }
    }

    fn phase(&self) -> PredictorPhase {
        match (self.prev, self.last_stride) {
            (None, _) => PredictorPhase::Idle,
            (Some(_), None) => PredictorPhase::Warming,
            (Some(_), Some(_)) => PredictorPhase::Predicting,
        }
    }
}
