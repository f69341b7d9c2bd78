use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use crate::Position;

/// A compact [`Copy`] set of board cells, one bit per cell in row-major order.
///
/// Used by the sequence catalog so that "how many cells do these two runs
/// share" is a single popcount.
///
/// Note that its "mutating" methods return a new object instead of really mutating.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet {
    // Only the low 100 bits are used.
    bits: u128,
}

impl CellSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn contains(self, pos: Position) -> bool {
        (self.bits & (1u128 << pos.index())) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub const fn insert(self, pos: Position) -> Self {
        Self {
            bits: self.bits | (1u128 << pos.index()),
        }
    }

    /// Number of cells contained in both sets.
    pub const fn overlap(self, other: CellSet) -> u32 {
        (self.bits & other.bits).count_ones()
    }

    /// Whether every cell of `other` is also in `self`.
    pub const fn is_superset(self, other: CellSet) -> bool {
        other.bits & !self.bits == 0
    }
}

impl FromIterator<Position> for CellSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = CellSet::new();
        for pos in iter {
            set = set.insert(pos);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Position;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellSetIter { bits: self.bits }
    }
}

/// Yields the cells of a [`CellSet`] in row-major order.
pub struct CellSetIter {
    bits: u128,
}

impl Iterator for CellSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Position::new(idx / 10, idx % 10))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CellSetIter {}

impl FusedIterator for CellSetIter {}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.into_iter()).finish()
    }
}
