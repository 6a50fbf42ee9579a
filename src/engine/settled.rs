//! Settled position tracking backed by a bit vector

use bitvec::prelude::*;
use std::fmt;

/// Positions whose values will not move again during a run
///
/// Divide-and-conquer sorts settle positions out of index order, so
/// membership is a bit per position rather than a growing prefix or suffix.
/// Inserting an already settled position is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettledSet {
    bits: BitVec,
}

impl SettledSet {
    /// Create an empty set for a sequence of `len` positions
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
        }
    }

    /// Create a set with every position settled
    pub fn full(len: usize) -> Self {
        Self {
            bits: bitvec![1; len],
        }
    }

    /// Settle a position, returning whether it was newly added
    ///
    /// Positions outside the sequence are ignored.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.bits.len() || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test position membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Settle every position
    pub fn fill(&mut self) {
        self.bits.fill(true);
    }

    /// Forget every settled position
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no position is settled
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if every position is settled
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Count settled positions
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Length of the tracked sequence
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Settled positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all settled positions as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for SettledSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SettledSet({}/{} settled: {:?})",
            self.count(),
            self.capacity(),
            self.to_vec()
        )
    }
}
