//! Loading and saving boards on disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::text::{FormatError, deserialize_bytes, serialize};
use crate::compute::Board;

/// Errors from reading or writing a board file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed board file: {0}")]
    Format(#[from] FormatError),
}

/// Write `board` to `path`, replacing any existing file.
pub fn save_board<P: AsRef<Path>>(path: P, board: &Board) -> Result<(), StoreError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(serialize(board).as_bytes())?;
    writer.flush()?;

    log::info!(
        "Saved {}x{} board ({} live) to {}",
        board.size(),
        board.size(),
        board.population(),
        path.display()
    );
    Ok(())
}

/// Read a `size` x `size` board from `path`.
///
/// The file is read and parsed completely before anything is returned.
pub fn load_board<P: AsRef<Path>>(path: P, size: usize) -> Result<Board, StoreError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;

    let board = deserialize_bytes(&bytes, size).inspect_err(|e| {
        log::warn!("Rejected board file {}: {}", path.display(), e);
    })?;

    log::info!(
        "Loaded {}x{} board ({} live) from {}",
        size,
        size,
        board.population(),
        path.display()
    );
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.txt");

        let board = Board::from_live_cells(16, [(0, 0), (15, 15), (7, 3)]).unwrap();
        save_board(&path, &board).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 16);
        assert!(contents.starts_with("True False"));

        assert_eq!(load_board(&path, 16).unwrap(), board);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.txt");

        save_board(&path, &Board::from_live_cells(4, [(1, 1)]).unwrap()).unwrap();
        save_board(&path, &Board::empty(4)).unwrap();

        assert_eq!(load_board(&path, 4).unwrap().population(), 0);
    }

    #[test]
    fn test_load_size_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.txt");
        save_board(&path, &Board::empty(8)).unwrap();

        let err = load_board(&path, 16).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Format(FormatError::LineCount {
                expected: 16,
                found: 8
            })
        ));
    }

    #[test]
    fn test_load_binary_file_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.txt");
        fs::write(&path, [b'T', b'r', b'u', b'e', 0xff, 0x00]).unwrap();

        let err = load_board(&path, 16).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Format(FormatError::InvalidUtf8 { offset: 4 })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_board(dir.path().join("nope.txt"), 16).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
