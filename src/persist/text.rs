//! Plain-text board format.
//!
//! ```text
//! True False False ...   (N tokens)
//! False True False ...
//! ...                    (N lines)
//! ```
//!
//! One board row per line, row-major, tokens separated by whitespace.
//! There is no header and no version field.

use crate::compute::Board;

/// Token written for a live cell.
pub const ALIVE_TOKEN: &str = "True";

/// Token written for a dead cell.
pub const DEAD_TOKEN: &str = "False";

/// Malformed board text. Line and column numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Expected {expected} lines, found {found}")]
    LineCount { expected: usize, found: usize },
    #[error("Line {line}: expected {expected} cells, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}, cell {column}: unrecognized value {token:?}")]
    UnrecognizedToken {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("Not UTF-8 text (invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
}

/// Parse a single cell token. Only a fixed vocabulary is accepted.
pub fn parse_cell(token: &str) -> Option<bool> {
    match token {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}

/// Render `board` as text, one newline-terminated line per row.
pub fn serialize(board: &Board) -> String {
    let size = board.size();
    // "False" plus a separator is the widest token.
    let mut out = String::with_capacity(size * size * (DEAD_TOKEN.len() + 1));
    for row in board.rows() {
        for (i, &alive) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(if alive { ALIVE_TOKEN } else { DEAD_TOKEN });
        }
        out.push('\n');
    }
    out
}

/// Parse a `size` x `size` board from text.
///
/// The whole input is validated before a board is produced; nothing partial
/// is ever returned. A file describing a different board size is an error.
///
/// # Panics
/// Panics if `size` is zero.
pub fn deserialize(text: &str, size: usize) -> Result<Board, FormatError> {
    assert!(size > 0, "Board size must be non-zero");

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != size {
        return Err(FormatError::LineCount {
            expected: size,
            found: lines.len(),
        });
    }

    let mut board = Board::empty(size);
    for (row, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != size {
            return Err(FormatError::TokenCount {
                line: row + 1,
                expected: size,
                found: tokens.len(),
            });
        }

        for (col, token) in tokens.into_iter().enumerate() {
            match parse_cell(token) {
                Some(true) => board.toggle(row, col),
                Some(false) => {}
                None => {
                    return Err(FormatError::UnrecognizedToken {
                        line: row + 1,
                        column: col + 1,
                        token: token.to_string(),
                    });
                }
            }
        }
    }

    Ok(board)
}

/// Parse a board from raw file contents, rejecting bytes that are not UTF-8.
pub fn deserialize_bytes(bytes: &[u8], size: usize) -> Result<Board, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|e| FormatError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    deserialize(text, size)
}
