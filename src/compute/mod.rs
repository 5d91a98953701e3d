//! Compute module - Board state and the Game of Life engine.

mod board;
mod changes;
mod neighbors;
mod step;

pub use board::*;
pub use changes::*;
pub use neighbors::*;
pub use step::*;
