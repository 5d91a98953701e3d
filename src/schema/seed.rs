//! Seed types for initializing a board.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compute::{Board, BoardError};

/// Complete seed specification for board initialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Starting configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Each cell alive with probability 0.5.
    Random {
        /// Fixed RNG seed for reproducible boards; entropy when absent.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// All cells dead.
    Empty,
    /// 2x2 still life.
    Block,
    /// Period-2 oscillator, initially horizontal.
    Blinker,
    /// Diagonal spaceship heading towards increasing row and column.
    Glider,
    /// Explicit list of live (row, col) cells.
    Custom { cells: Vec<(usize, usize)> },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Random { seed: None }
    }
}

impl Pattern {
    /// Look up a pattern by its lowercase name, as typed on a command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Pattern::Random { seed: None }),
            "empty" | "clear" => Some(Pattern::Empty),
            "block" => Some(Pattern::Block),
            "blinker" => Some(Pattern::Blinker),
            "glider" => Some(Pattern::Glider),
            _ => None,
        }
    }

    /// Cell offsets relative to the pattern origin, for the named shapes.
    fn shape(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Blinker => &[(1, 0), (1, 1), (1, 2)],
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            _ => &[],
        }
    }
}

impl Seed {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    /// Generate a `size` x `size` board from this seed.
    ///
    /// Named shapes are placed with their 3x3 bounding box centred on the board,
    /// wrapping around the edges if the board is smaller than the shape.
    /// Custom cells are never wrapped: any cell outside the board is an error.
    pub fn generate(&self, size: usize) -> Result<Board, BoardError> {
        match &self.pattern {
            Pattern::Random { seed: Some(seed) } => {
                Ok(Board::random_with(size, &mut StdRng::seed_from_u64(*seed)))
            }
            Pattern::Random { seed: None } => Ok(Board::random(size)),
            Pattern::Empty => Ok(Board::empty(size)),
            Pattern::Custom { cells } => Board::from_live_cells(size, cells.iter().copied()),
            named => {
                let origin = (size / 2 + size - 1) % size;
                let cells = named
                    .shape()
                    .iter()
                    .map(|&(r, c)| ((origin + r) % size, (origin + c) % size));
                Board::from_live_cells(size, cells)
            }
        }
    }
}
