//! Board state - a fixed-size toroidal grid of boolean cells.

use std::fmt;

use rand::prelude::*;

/// A (row, column) position on the board. Both components are in `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors raised by direct cell access and board construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Cell ({row}, {col}) is outside the {size}x{size} board")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
    #[error("Board rows must form a non-empty square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Square grid of alive/dead cells.
///
/// Cells are stored as a flat row-major array: `cells[row * size + col]`.
/// Every cell always holds an explicit value. Direct access through [`Board::get`]
/// and [`Board::toggle`] never wraps; wraparound is reserved for neighbour lookups
/// (see [`count_live_neighbors`](super::count_live_neighbors)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// All-dead board.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Board size must be non-zero");
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Board where every cell is independently alive with probability 0.5.
    pub fn random(size: usize) -> Self {
        Self::random_with(size, &mut StdRng::from_entropy())
    }

    /// Like [`Board::random`], drawing from the given generator.
    pub fn random_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut board = Self::empty(size);
        for cell in board.cells.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }
        board
    }

    /// Build a board from explicit rows.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::NotSquare {
                row: 0,
                expected: 1,
                found: 0,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Board with exactly the given cells alive.
    pub fn from_live_cells<I>(size: usize, live: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::empty(size);
        for (row, col) in live {
            let idx = board.checked_idx(row, col)?;
            board.cells[idx] = true;
        }
        Ok(board)
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Convert (row, col) to flat index without bounds checking against `size`.
    #[inline]
    pub(crate) fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn checked_idx(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.idx(row, col))
    }

    /// State of the cell at (row, col).
    ///
    /// # Panics
    /// Panics if either index is outside `[0, size)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.checked_get(row, col) {
            Ok(alive) => alive,
            Err(e) => panic!("{e}"),
        }
    }

    /// State of the cell at (row, col), or an error when out of range.
    pub fn checked_get(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.checked_idx(row, col).map(|idx| self.cells[idx])
    }

    /// Flip the cell at (row, col) in place.
    ///
    /// # Panics
    /// Panics if either index is outside `[0, size)`.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Err(e) = self.try_toggle(row, col) {
            panic!("{e}");
        }
    }

    /// Flip the cell at (row, col), returning its new state.
    pub fn try_toggle(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        let idx = self.checked_idx(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of all live cells in row-major order.
    pub fn live_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| Coordinate::new(i / self.size, i % self.size))
            .collect()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn from_cells(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(16);
        assert_eq!(board.size(), 16);
        assert_eq!(board.population(), 0);
        assert!(board.live_cells().is_empty());
    }

    #[test]
    fn test_random_is_fully_populated() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::random_with(16, &mut rng);
        assert_eq!(board.rows().count(), 16);
        assert!(board.rows().all(|row| row.len() == 16));
        // 256 fair coin flips landing all one way would be remarkable.
        assert!(board.population() > 0);
        assert!(board.population() < 256);
    }

    #[test]
    fn test_random_with_seed_is_deterministic() {
        let a = Board::random_with(16, &mut StdRng::seed_from_u64(42));
        let b = Board::random_with(16, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_toggle_flips_in_place() {
        let mut board = Board::empty(4);
        board.toggle(1, 2);
        assert!(board.get(1, 2));
        assert_eq!(board.population(), 1);
        board.toggle(1, 2);
        assert!(!board.get(1, 2));
    }

    #[test]
    fn test_try_toggle_out_of_range() {
        let mut board = Board::empty(16);
        let err = board.try_toggle(16, 0).unwrap_err();
        assert_eq!(
            err,
            BoardError::IndexOutOfRange {
                row: 16,
                col: 0,
                size: 16
            }
        );
        assert_eq!(board, Board::empty(16));
    }

    #[test]
    fn test_checked_get_does_not_wrap() {
        let board = Board::from_live_cells(4, [(0, 0)]).unwrap();
        assert!(board.checked_get(4, 4).is_err());
        assert!(board.checked_get(0, 4).is_err());
        assert_eq!(board.checked_get(0, 0), Ok(true));
    }

    #[test]
    #[should_panic(expected = "outside the 16x16 board")]
    fn test_get_out_of_range_panics() {
        let board = Board::empty(16);
        board.get(0, 16);
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 board")]
    fn test_toggle_out_of_range_panics() {
        let mut board = Board::empty(4);
        board.toggle(7, 1);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![true, false], vec![false]];
        assert_eq!(
            Board::from_rows(rows),
            Err(BoardError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert!(Board::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_live_cells_row_major() {
        let board = Board::from_live_cells(3, [(2, 0), (0, 1), (1, 2)]).unwrap();
        assert_eq!(
            board.live_cells(),
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 2),
                Coordinate::new(2, 0)
            ]
        );
    }

    #[test]
    fn test_display() {
        let board = Board::from_live_cells(3, [(1, 1)]).unwrap();
        assert_eq!(board.to_string(), "...\n.#.\n...\n");
    }
}
