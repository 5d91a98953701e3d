//! Generation step - applies the Game of Life transition to a whole board.
//!
//! Every new state is computed from the old board only; the update is
//! synchronous and the input board is never modified.

use super::{Board, ChangeSet, count_live_neighbors, diff};

/// Outcome of advancing a board by one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Live cells in the new board.
    pub population: usize,
    /// The next generation.
    pub board: Board,
    /// Cells that changed relative to the previous board.
    pub changes: ChangeSet,
}

/// Conway's transition rule (B3/S23).
///
/// A live cell survives with 2 or 3 live neighbours; a dead cell is born
/// with exactly 3. Everything else is dead in the next generation.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        1 < neighbors && neighbors < 4
    } else {
        neighbors == 3
    }
}

/// Compute the next generation of `board`.
pub fn advance(board: &Board) -> GenerationResult {
    let size = board.size();
    let mut next = Vec::with_capacity(size * size);

    for row in 0..size {
        for col in 0..size {
            let alive = board.cells()[board.idx(row, col)];
            let n = count_live_neighbors(board, row, col);
            next.push(next_state(alive, n));
        }
    }

    let next = Board::from_cells(size, next);
    let population = next.population();
    let changes = diff(&next, board);

    GenerationResult {
        population,
        board: next,
        changes,
    }
}

/// Advance `board` by `generations` steps and return the final board.
pub fn run(board: &Board, generations: u64) -> Board {
    let mut current = board.clone();
    for _ in 0..generations {
        current = advance(&current).board;
    }
    current
}
