//! Toroidal Life - Conway's Game of Life on a fixed-size wrapping grid.
//!
//! The board has no edges: opposite sides are adjacent, so the grid is
//! topologically a torus. Every generation reports exactly which cells
//! changed, so a front end only has to repaint those.
//!
//! # Architecture
//!
//! - `schema`: Configuration and seed patterns
//! - `compute`: Board, neighbour counting, generation step and diffing
//! - `persist`: Plain-text board format and file load/save
//! - `session`: Driver owning the live board, plus the `Renderer` boundary
//!
//! # Example
//!
//! ```rust
//! use toroidal_life::{
//!     compute::{Board, advance},
//!     persist::{deserialize, serialize},
//! };
//!
//! // A 2x2 block never changes.
//! let block = Board::from_live_cells(4, [(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
//! let result = advance(&block);
//! assert_eq!(result.population, 4);
//! assert!(result.changes.is_empty());
//!
//! // Boards round-trip through text.
//! let text = serialize(&result.board);
//! assert_eq!(deserialize(&text, 4).unwrap(), block);
//! ```

pub mod compute;
pub mod persist;
pub mod schema;
pub mod session;

// Re-export commonly used types
pub use compute::{Board, ChangeSet, Coordinate, GenerationResult, advance, diff};
pub use schema::{LifeConfig, Pattern, Seed};
pub use session::{Renderer, Session};
