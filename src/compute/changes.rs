//! Change tracking between two board snapshots.
//!
//! A renderer only needs to repaint cells whose state actually changed, so
//! every board-changing operation reports exactly the Hamming difference.

use super::{Board, Coordinate};

/// Coordinates whose state differs between two boards, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet(Vec<Coordinate>);

impl ChangeSet {
    /// A change set touching no cells.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A change set touching a single cell.
    pub fn single(coord: Coordinate) -> Self {
        Self(vec![coord])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.0.contains(&coord)
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }
}

impl IntoIterator for ChangeSet {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Cells that differ between `new` and `old`.
///
/// The result is the same whichever order the boards are given in; the
/// naming only reflects how callers usually pass them.
///
/// # Panics
/// Panics if the boards have different sizes.
pub fn diff(new: &Board, old: &Board) -> ChangeSet {
    assert_eq!(
        new.size(),
        old.size(),
        "Cannot diff boards of different sizes"
    );
    let size = new.size();

    let changes = new
        .cells()
        .iter()
        .zip(old.cells())
        .enumerate()
        .filter(|&(_, (a, b))| a != b)
        .map(|(i, _)| Coordinate::new(i / size, i % size))
        .collect();

    ChangeSet(changes)
}
