//! Sparse transition table.
//!
//! Counts observed `(previous, current)` address transitions. Only addresses
//! that have been seen occupy space, so the table works for unbounded
//! address spaces without preallocation.

use std::collections::BTreeMap;

use crate::common::Address;

/// First-order transition counts, keyed by source then successor.
///
/// Successor maps are ordered by address, which makes the argmax tie-break
/// (smallest successor wins) a property of iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rows: BTreeMap<Address, BTreeMap<Address, u64>>,
}

impl TransitionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one `from -> to` transition and returns its new count.
    pub fn record(&mut self, from: Address, to: Address) -> u64 {
        let count = self.rows.entry(from).or_default().entry(to).or_insert(0);
        *count += 1;
        *count
    }

    /// Number of times `from -> to` has been observed.
    pub fn count(&self, from: Address, to: Address) -> u64 {
        self.rows
            .get(&from)
            .and_then(|row| row.get(&to))
            .copied()
            .unwrap_or(0)
    }

    /// Successor counts of `from`, in ascending successor order.
    pub fn successors(&self, from: Address) -> impl Iterator<Item = (Address, u64)> + '_ {
        self.rows
            .get(&from)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&to, &n)| (to, n)))
    }

    /// Most frequently observed successor of `from`.
    ///
    /// Ties go to the smallest successor: the scan is ascending and only a
    /// strictly greater count replaces the current best.
    pub fn most_probable_next(&self, from: Address) -> Option<Address> {
        let mut best: Option<(Address, u64)> = None;
        for (to, count) in self.successors(from) {
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((to, count));
            }
        }
        best.map(|(to, _)| to)
    }

    /// Number of source addresses with at least one recorded transition.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of recorded transitions.
    pub fn total_transitions(&self) -> u64 {
        self.rows.values().flat_map(BTreeMap::values).sum()
    }
}
