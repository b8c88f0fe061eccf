//! # ArcCore
//!
//! The Adaptive Replacement Cache state machine.
//!
//! Per SPEC_FULL.md Section 4.2, this holds the four lists (`T1`, `T2`,
//! `B1`, `B2`), the capacity `c` and adaptation target `p`, and implements
//! `get`/`peek`/`put`/`update`/`delete` plus the `REPLACE`/`ADJUST`
//! subroutines that keep the invariants in Section 3 intact after every
//! operation.
//!
//! There is exactly one replacement discipline in scope, so this is a
//! plain struct with inherent methods rather than a trait with one impl.

use crate::ordered_list::{GhostList, OrderedList};

/// Compute the adaptation step `max(1, floor(numerator / denominator))`,
/// substituting `1` when `denominator` is zero instead of dividing by it.
fn adaptation_step(numerator: usize, denominator: usize) -> usize {
    if denominator == 0 {
        1
    } else {
        (numerator / denominator).max(1)
    }
}

/// The Adaptive Replacement Cache state machine.
///
/// `K` must be `Ord + Clone` (required by the underlying `OrderedList`
/// indices). `V` carries no bound: `ArcCore` never clones a value, it only
/// moves values between `T1` and `T2` or discards them on ghost demotion.
#[derive(Debug)]
pub struct ArcCore<K: Ord + Clone, V> {
    capacity: usize,
    /// Target resident size of `T1` (`p` in the literature), in `[0, capacity]`.
    target: usize,
    t1: OrderedList<K, V>,
    t2: OrderedList<K, V>,
    b1: GhostList<K>,
    b2: GhostList<K>,
}

impl<K: Ord + Clone, V> ArcCore<K, V> {
    /// Create a new cache with the given positive capacity.
    ///
    /// `capacity` must be nonzero; callers at the facade boundary are
    /// expected to validate this and surface `CacheError::InvalidCapacity`
    /// before ever constructing an `ArcCore`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            target: 0,
            t1: OrderedList::new(),
            t2: OrderedList::new(),
            b1: GhostList::new(),
            b2: GhostList::new(),
        }
    }

    /// The fixed capacity this instance was constructed with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current value of the adaptation target `p`.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of resident entries in `T1`.
    #[must_use]
    pub fn t1_len(&self) -> usize {
        self.t1.size()
    }

    /// Number of resident entries in `T2`.
    #[must_use]
    pub fn t2_len(&self) -> usize {
        self.t2.size()
    }

    /// Number of ghost keys in `B1`.
    #[must_use]
    pub fn b1_len(&self) -> usize {
        self.b1.size()
    }

    /// Number of ghost keys in `B2`.
    #[must_use]
    pub fn b2_len(&self) -> usize {
        self.b2.size()
    }

    /// Iterate `T1` from LRU to MRU.
    pub fn t1_iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.t1.iter_from_lru()
    }

    /// Iterate `T2` from LRU to MRU.
    pub fn t2_iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.t2.iter_from_lru()
    }

    /// Iterate `B1` keys from LRU to MRU.
    pub fn b1_iter(&self) -> impl Iterator<Item = &K> {
        self.b1.iter_from_lru()
    }

    /// Iterate `B2` keys from LRU to MRU.
    pub fn b2_iter(&self) -> impl Iterator<Item = &K> {
        self.b2.iter_from_lru()
    }

    /// Non-mutating read: `touch = false` in SPEC_FULL.md Section 4.2.
    ///
    /// Does not change rank or list membership, so the facade may allow
    /// this to run concurrently with other reads.
    #[must_use]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.t1.get(key).or_else(|| self.t2.get(key))
    }

    /// Mutating read ("touch"): `touch = true` in SPEC_FULL.md Section 4.2.
    ///
    /// A hit in `T1` promotes to MRU of `T2`; a hit in `T2` re-bumps to MRU
    /// of `T2`. `B1`/`B2` membership is never a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.t1.contains(key) {
            if let Some(value) = self.t1.delete(key) {
                self.t2.put_mru(key.clone(), value);
            }
            self.t2.get(key)
        } else if self.t2.contains(key) {
            if let Some(value) = self.t2.delete(key) {
                self.t2.put_mru(key.clone(), value);
            }
            self.t2.get(key)
        } else {
            None
        }
    }

    /// Insert or refresh `key` with `value`, running the full ARC state
    /// machine (SPEC_FULL.md Section 4.2, `put`).
    pub fn put(&mut self, key: K, value: V) {
        if self.t1.contains(&key) {
            // Second distinct access: promote to T2. No target change, no REPLACE.
            self.t1.delete(&key);
            self.t2.put_mru(key, value);
        } else if self.t2.contains(&key) {
            // Repeat hit in T2: overwrite and bump to MRU. No target change, no REPLACE.
            self.t2.put_mru(key, value);
        } else if self.b1.contains(&key) {
            // Ghost rehit in B1: workload rewards recency, grow the T1 target.
            let step = adaptation_step(self.b2.size(), self.b1.size());
            self.target = self.target.saturating_add(step).min(self.capacity);
            self.replace(false);
            self.b1.delete(&key);
            self.t2.put_mru(key, value);
        } else if self.b2.contains(&key) {
            // Ghost rehit in B2: workload rewards frequency, shrink the T1 target.
            let step = adaptation_step(self.b1.size(), self.b2.size());
            self.target = self.target.saturating_sub(step);
            self.replace(true);
            self.b2.delete(&key);
            self.t2.put_mru(key, value);
        } else {
            // Pure miss.
            self.adjust();
            self.t1.put_mru(key, value);
        }
    }

    /// Replace the value for `key` if resident; optionally touch to MRU of
    /// `T2`. Returns `false` without effect if `key` is not resident.
    pub fn update(&mut self, key: &K, value: V, touch: bool) -> bool {
        if self.t1.contains(key) {
            if touch {
                self.t1.delete(key);
                self.t2.put_mru(key.clone(), value);
            } else {
                self.t1.update(key, value);
            }
            true
        } else if self.t2.contains(key) {
            if touch {
                // put_mru deletes-then-reinserts, which both overwrites the
                // value and bumps the rank in one step.
                self.t2.put_mru(key.clone(), value);
            } else {
                self.t2.update(key, value);
            }
            true
        } else {
            false
        }
    }

    /// Remove `key` from whichever of the four lists contains it.
    ///
    /// Returns whether a key was actually removed. Has no effect on `p`.
    pub fn delete(&mut self, key: &K) -> bool {
        self.t1.delete(key).is_some()
            || self.t2.delete(key).is_some()
            || self.b1.delete(key)
            || self.b2.delete(key)
    }

    /// Demote one resident entry to its ghost list.
    ///
    /// Chooses `T1` when `|T1| >= 1` and either (`in_b2` and `|T1| == p`) or
    /// `|T1| > p`; otherwise chooses `T2`. A no-op if the chosen list is
    /// empty.
    fn replace(&mut self, in_b2: bool) {
        let t1_len = self.t1.size();
        let take_from_t1 = t1_len >= 1 && ((in_b2 && t1_len == self.target) || t1_len > self.target);

        if take_from_t1 {
            if let Some((key, _value)) = self.t1.pop_lru() {
                self.b1.put_mru(key);
            }
        } else if let Some((key, _value)) = self.t2.pop_lru() {
            self.b2.put_mru(key);
        }
    }

    /// Trim ghosts and/or residents to make room for one new resident entry
    /// in `T1` before a pure miss is inserted.
    fn adjust(&mut self) {
        let l1 = self.t1.size() + self.b1.size();
        let l2 = self.t2.size() + self.b2.size();

        if l1 == self.capacity {
            if self.t1.size() < self.capacity {
                self.b1.pop_lru();
                self.replace(false);
            } else {
                // |T1| == capacity, |B1| == 0: hard evict, value lost.
                if self.t1.pop_lru().is_some() {
                    tracing::trace!(capacity = self.capacity, "arc_core hard eviction from T1");
                }
            }
        } else if l1 < self.capacity && l1 + l2 >= self.capacity {
            if l1 + l2 >= 2 * self.capacity {
                self.b2.pop_lru();
            }
            self.replace(false);
        }
    }
}
