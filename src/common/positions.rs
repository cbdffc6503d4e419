//! Matched-position bookkeeping shared across the matching policies.
//!
//! # Bitmask Representation
//!
//! Matched positions are stored as a `u32` bitmask rather than `Vec<usize>`.
//! This eliminates per-window heap allocation (the dominant cost when
//! scanning thousands of windows) and turns membership checks into a single
//! bitwise AND instead of an O(n) scan. Capacity is 32 positions, far above
//! the 10 pattern slots and any realistic drawn-number count.

use serde::ser::{Serialize, Serializer};

/// Maximum number of distinct positions a [`PositionSet`] can hold.
pub const POSITION_CAPACITY: usize = 32;

/// A set of matched position indices, backed by a `u32` bitmask.
///
/// Bit `i` is set when position `i` matched. Inserts at or beyond
/// [`POSITION_CAPACITY`] are ignored; matching only ever produces indices of
/// actually drawn numbers, which stay well below the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionSet(u32);

impl PositionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a set from raw bits. Primarily for tests.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Adds a position to the set. Out-of-capacity positions are ignored.
    pub fn insert(&mut self, position: usize) {
        if position < POSITION_CAPACITY {
            self.0 |= 1 << position;
        }
    }

    /// Returns true if the position is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, position: usize) -> bool {
        position < POSITION_CAPACITY && (self.0 >> position) & 1 != 0
    }

    /// Number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no position is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterates positions in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..POSITION_CAPACITY).filter(move |&p| self.contains(p))
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl std::fmt::Display for PositionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for position in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{position}")?;
            first = false;
        }
        Ok(())
    }
}

/// Serialized as an ascending sequence of indices so the presentation layer
/// receives plain JSON arrays.
impl Serialize for PositionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
