//! Access-History Window.
//!
//! A bounded FIFO of recently seen addresses, each tagged with whether it was
//! demanded by the access stream or speculatively prefetched. The window is
//! how the transition-table prefetcher scores itself: a demand access that
//! finds its address tagged `Prefetched` confirms that prefetch.
//!
//! Entries are never reordered. Confirming a prefetch flips its tag in place,
//! and re-demanding a resident address leaves its slot where it is, so
//! eviction order is pure insertion order.
//!
//! # Performance
//!
//! - **Time Complexity:** O(W) per lookup where W is the window capacity
//! - **Space Complexity:** O(W)

use std::collections::VecDeque;

use crate::common::Address;

/// How an address entered the history window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// A real access from the stream.
    Demand,
    /// A speculative prefetch not yet confirmed.
    Prefetched,
}

/// A single window slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The address held by this slot.
    pub address: Address,
    /// How the address entered the window.
    pub origin: Origin,
}

impl HistoryEntry {
    /// Creates a demand entry.
    pub const fn demand(address: Address) -> Self {
        Self {
            address,
            origin: Origin::Demand,
        }
    }

    /// Creates a prefetched entry.
    pub const fn prefetched(address: Address) -> Self {
        Self {
            address,
            origin: Origin::Prefetched,
        }
    }
}

/// Result of looking a demand access up in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The address was an outstanding prefetch; it is now confirmed.
    PrefetchHit,
    /// The address was already resident as a demand access.
    DemandHit,
    /// The address was not in the window.
    Miss,
}

/// Bounded, insertion-ordered window of recent addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl AccessHistory {
    /// Creates an empty window.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of entries. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of entries.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the window holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the resident entry for `address`, if any.
    pub fn get(&self, address: Address) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.address == address)
    }

    /// Returns `true` if `address` is resident under any origin.
    pub fn contains(&self, address: Address) -> bool {
        self.get(address).is_some()
    }

    /// Scores a demand access against the window.
    ///
    /// An outstanding prefetch for `address` is flipped to `Demand` in place,
    /// so each prefetch is confirmed at most once.
    pub fn confirm(&mut self, address: Address) -> Lookup {
        match self.entries.iter_mut().find(|e| e.address == address) {
            Some(entry) if entry.origin == Origin::Prefetched => {
                entry.origin = Origin::Demand;
                Lookup::PrefetchHit
            }
            Some(_) => Lookup::DemandHit,
            None => Lookup::Miss,
        }
    }

    /// Appends an entry, evicting the oldest one when full.
    ///
    /// The caller is responsible for not inserting an address that is already
    /// resident.
    ///
    /// # Returns
    ///
    /// The evicted entry, if the window was at capacity.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        debug_assert!(!self.contains(entry.address), "duplicate window entry");
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Records a demand access.
    ///
    /// A resident address keeps its slot and is marked `Demand`; otherwise a
    /// new demand entry is appended.
    ///
    /// # Returns
    ///
    /// The evicted entry, if appending displaced one.
    pub fn record_demand(&mut self, address: Address) -> Option<HistoryEntry> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.address == address) {
            entry.origin = Origin::Demand;
            return None;
        }
        self.push(HistoryEntry::demand(address))
    }
}
