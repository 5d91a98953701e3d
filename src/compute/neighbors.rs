//! Neighbour counting with toroidal wraparound.
//!
//! Opposite edges of the board are adjacent, so every cell has exactly
//! eight neighbours regardless of its position.

use super::Board;

/// Step `offset` positions forward around a ring of length `size`.
/// An offset of `size - 1` is a step of -1.
#[inline]
fn wrapped(index: usize, offset: usize, size: usize) -> usize {
    (index + offset) % size
}

/// Count live cells among the eight neighbours of (row, col).
///
/// Indices are taken modulo the board size, so (0, 0) on a 16x16 board sees
/// (15, 15), (15, 0), (15, 1), (0, 15), (0, 1), (1, 15), (1, 0) and (1, 1).
/// The cell's own state never contributes. Result is always in `0..=8`.
///
/// `row` and `col` must be in `[0, size)`.
pub fn count_live_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let size = board.size();
    let cells = board.cells();

    let row_prev = wrapped(row, size - 1, size);
    let row_next = wrapped(row, 1, size);
    let col_prev = wrapped(col, size - 1, size);
    let col_next = wrapped(col, 1, size);

    let rows = [(row_prev, true), (row, false), (row_next, true)];
    let cols = [col_prev, col, col_next];

    let mut count = 0u8;
    for (r, include_center) in rows {
        let base = r * size;
        for (i, &c) in cols.iter().enumerate() {
            // Skip the cell itself.
            if i == 1 && !include_center {
                continue;
            }
            if cells[base + c] {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_isolated_cell_has_no_neighbors() {
        let board = Board::from_live_cells(16, [(5, 5)]).unwrap();
        assert_eq!(count_live_neighbors(&board, 5, 5), 0);
        assert_eq!(count_live_neighbors(&board, 4, 4), 1);
        assert_eq!(count_live_neighbors(&board, 6, 5), 1);
        assert_eq!(count_live_neighbors(&board, 7, 5), 0);
    }

    #[test]
    fn test_corner_wraps_to_opposite_edges() {
        let neighbours = [
            (15, 15),
            (0, 15),
            (1, 15),
            (15, 0),
            (1, 0),
            (15, 1),
            (0, 1),
            (1, 1),
        ];
        let board = Board::from_live_cells(16, neighbours).unwrap();
        assert_eq!(count_live_neighbors(&board, 0, 0), 8);

        // Each one on its own is seen exactly once.
        for cell in neighbours {
            let board = Board::from_live_cells(16, [cell]).unwrap();
            assert_eq!(count_live_neighbors(&board, 0, 0), 1, "neighbour {cell:?}");
        }
    }

    #[test]
    fn test_full_board_counts_eight() {
        let mut board = Board::empty(4);
        for r in 0..4 {
            for c in 0..4 {
                board.toggle(r, c);
            }
        }
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(count_live_neighbors(&board, r, c), 8);
            }
        }
    }

    #[test]
    fn test_tiny_boards_alias_neighbors() {
        // On a 1x1 torus every neighbour is the cell itself, which is excluded
        // only at offset (0, 0); the other eight offsets all land on it.
        let board = Board::from_live_cells(1, [(0, 0)]).unwrap();
        assert_eq!(count_live_neighbors(&board, 0, 0), 8);

        let board = Board::from_live_cells(2, [(0, 1)]).unwrap();
        // (0, 0) reaches (0, 1) through both the left and the right offset.
        assert_eq!(count_live_neighbors(&board, 0, 0), 2);
    }

    proptest! {
        #[test]
        fn prop_count_in_range_and_ignores_self(
            size in 3usize..20,
            seed in any::<u64>(),
            row_frac in 0.0f64..1.0,
            col_frac in 0.0f64..1.0,
        ) {
            use rand::{SeedableRng, rngs::StdRng};
            let mut board = Board::random_with(size, &mut StdRng::seed_from_u64(seed));
            let row = ((size as f64) * row_frac) as usize % size;
            let col = ((size as f64) * col_frac) as usize % size;

            let before = count_live_neighbors(&board, row, col);
            prop_assert!(before <= 8);

            board.toggle(row, col);
            prop_assert_eq!(count_live_neighbors(&board, row, col), before);
        }
    }
}
