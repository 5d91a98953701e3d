//! Board persistence.
//!
//! The plain-text board format is the only state that outlives a session.
//! See [`text`] for the layout.

pub mod text;
mod store;

pub use store::{StoreError, load_board, save_board};
pub use text::{FormatError, deserialize, deserialize_bytes, serialize};
