//! The transposition store: an append-only log of visited states, split into
//! a sorted prefix (binary search) and a small unsorted tail (linear scan),
//! amortising the cost of keeping the whole log searchable.
//!
//! Mirrors `makeStoredState`/`findStoredStates` in the puzzle's original
//! recursive solver: a `qsort`-ed array plus an `lsearch`-ed overflow buffer,
//! periodically merged back together.

use std::cmp::Ordering;

use crate::search::statekey::StateKey;

/// Once the unsorted tail reaches this many entries it is merged into the
/// sorted prefix. Matches the original's `UNSORTSIZE`.
pub const UNSORT_BATCH: usize = 50;

/// Whether a probed key was already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The key was new; it has been recorded.
    Inserted,
    /// The key was already known. The stored entry's day may have been
    /// lowered to `day` if this occurrence is earlier (see
    /// [`TranspositionStore::contains_or_add`]).
    AlreadySeen,
}

/// Sorted-prefix + unsorted-tail transposition log.
///
/// Single-owner, `&mut self` API — per the puzzle's single-threaded
/// concurrency model there is never a second writer to race against, so this
/// carries none of the atomic machinery a concurrent hash table would need.
#[derive(Debug, Default)]
pub struct TranspositionStore {
    sorted: Vec<StateKey>,
    unsorted: Vec<StateKey>,
}

impl TranspositionStore {
    pub fn new() -> TranspositionStore {
        TranspositionStore { sorted: Vec::new(), unsorted: Vec::new() }
    }

    /// Discard all recorded states. Called at the start of every Bisector
    /// iteration (mirrors `makeStoredState`).
    pub fn clear(&mut self) {
        self.sorted.clear();
        self.unsorted.clear();
    }

    pub fn len(&self) -> usize {
        self.sorted.len() + self.unsorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up `key`. If found, its stored `day` is lowered to `key.day()`
    /// when the new occurrence is earlier (mirrors the original's
    /// `found->day > search_current.day` tiebreak), and [`Probe::AlreadySeen`]
    /// is returned. Otherwise `key` is inserted and [`Probe::Inserted`] is
    /// returned, re-sorting the store if the unsorted tail has filled up.
    pub fn contains_or_add(&mut self, key: StateKey) -> Probe {
        if let Ok(idx) = self.sorted.binary_search_by(|probe| probe.cmp(&key)) {
            if self.sorted[idx].day() > key.day() {
                self.sorted[idx].set_day(key.day());
            }
            return Probe::AlreadySeen;
        }

        if let Some(existing) = self.unsorted.iter_mut().find(|probe| probe.words() == key.words()) {
            if existing.day() > key.day() {
                existing.set_day(key.day());
            }
            return Probe::AlreadySeen;
        }

        self.unsorted.push(key);
        if self.unsorted.len() >= UNSORT_BATCH {
            self.merge();
        }
        Probe::Inserted
    }

    fn merge(&mut self) {
        self.sorted.append(&mut self.unsorted);
        self.sorted.sort_by(|a, b| a.cmp(b));
    }

    /// `true` if the two partitions hold no common key. Exposed only for
    /// tests asserting the store's core invariant.
    #[cfg(test)]
    fn partitions_disjoint(&self) -> bool {
        self.unsorted.iter().all(|u| self.sorted.binary_search_by(|s| s.cmp(u)).is_err())
    }

    /// Merge state: whether the sorted prefix is actually in ascending order.
    #[cfg(test)]
    fn sorted_is_ordered(&self) -> bool {
        self.sorted.windows(2).all(|w| w[0].cmp(&w[1]) != Ordering::Greater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foxhole_core::BitBoard;

    fn key(game: u64, day: u32) -> StateKey {
        StateKey::new(BitBoard::new(game), day, &[])
    }

    #[test]
    fn first_insertion_is_new() {
        let mut tt = TranspositionStore::new();
        assert_eq!(tt.contains_or_add(key(1, 0)), Probe::Inserted);
    }

    #[test]
    fn duplicate_is_detected_within_unsorted() {
        let mut tt = TranspositionStore::new();
        tt.contains_or_add(key(1, 5));
        assert_eq!(tt.contains_or_add(key(1, 7)), Probe::AlreadySeen);
    }

    #[test]
    fn duplicate_is_detected_after_merge_into_sorted() {
        let mut tt = TranspositionStore::new();
        for d in 0..UNSORT_BATCH as u32 {
            tt.contains_or_add(key(d as u64 + 100, d));
        }
        assert!(tt.partitions_disjoint());
        assert!(tt.sorted_is_ordered());
        assert_eq!(tt.contains_or_add(key(100, 0)), Probe::AlreadySeen);
    }

    #[test]
    fn earlier_day_overwrites_stored_day() {
        let mut tt = TranspositionStore::new();
        tt.contains_or_add(key(1, 10));
        tt.contains_or_add(key(1, 3));
        // A later probe at day 3 should have lowered the stored day; a probe
        // at day 3 again must still read as already-seen without changing it.
        assert_eq!(tt.contains_or_add(key(1, 3)), Probe::AlreadySeen);
    }

    #[test]
    fn clear_empties_both_partitions() {
        let mut tt = TranspositionStore::new();
        tt.contains_or_add(key(1, 0));
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.contains_or_add(key(1, 0)), Probe::Inserted);
    }
}
