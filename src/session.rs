//! Session - the driver that owns the live board.
//!
//! A [`Session`] holds exactly one board and exposes the operations a user
//! interface issues: toggle a cell, clear, randomize, run some generations,
//! load and save. After every board-changing operation the attached
//! [`Renderer`] is told precisely which cells changed.

use std::path::Path;

use rand::prelude::*;

use crate::compute::{Board, BoardError, ChangeSet, Coordinate, advance, diff};
use crate::persist::{StoreError, load_board, save_board};
use crate::schema::{ConfigError, LifeConfig, Seed};

/// Receives board updates. Drawing, pacing and stop requests live here,
/// outside the engine.
pub trait Renderer {
    /// Draw the whole board. Called once when a session starts.
    fn draw(&mut self, board: &Board);

    /// Redraw only the cells in `changes`; `board` is the new state.
    fn repaint(&mut self, board: &Board, changes: &ChangeSet);

    /// Whether a multi-generation run should continue.
    fn running(&self) -> bool {
        true
    }

    /// Called after each generation of a run. Animation pacing goes here.
    fn tick(&mut self) {}
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Renderer for Headless {
    fn draw(&mut self, _board: &Board) {}
    fn repaint(&mut self, _board: &Board, _changes: &ChangeSet) {}
}

/// Rejected generation count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleCountError {
    #[error("{0:?} is not a whole number of cycles")]
    NotANumber(String),
    #[error("{value} cycles is more than the maximum of {max}")]
    OutOfRange { value: u64, max: u32 },
}

/// Parse a user-typed generation count, accepting `0..=max`.
pub fn parse_cycles(text: &str, max: u32) -> Result<u32, CycleCountError> {
    let trimmed = text.trim();
    let value: u64 = trimmed
        .parse()
        .map_err(|_| CycleCountError::NotANumber(trimmed.to_string()))?;

    match u32::try_from(value) {
        Ok(cycles) if cycles <= max => Ok(cycles),
        _ => Err(CycleCountError::OutOfRange { value, max }),
    }
}

/// Map a point in board space to the cell under it.
///
/// Each cell is a unit square with cell (x, y) covering `[x, x+1) x [y, y+1)`;
/// the x axis selects the row. Points outside `[0, size)` on either axis,
/// including the far edge itself, are not on the board.
pub fn locate_click(x: f64, y: f64, size: usize) -> Option<Coordinate> {
    let limit = size as f64;
    if !(0.0..limit).contains(&x) || !(0.0..limit).contains(&y) {
        return None;
    }
    Some(Coordinate::new(x.floor() as usize, y.floor() as usize))
}

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Cycles(#[from] CycleCountError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Board is {found}x{found} but the session is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Outcome of a multi-generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations actually computed.
    pub generations: u32,
    /// Live cells after the last generation.
    pub population: usize,
    /// True if the renderer asked to stop before all cycles ran.
    pub stopped_early: bool,
}

/// Interactive Game of Life session.
pub struct Session<R: Renderer> {
    config: LifeConfig,
    board: Board,
    generation: u64,
    rng: StdRng,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Start a session from a seed pattern.
    pub fn new(config: LifeConfig, seed: &Seed, renderer: R) -> Result<Self, SessionError> {
        config.validate()?;
        let board = seed.generate(config.size)?;
        Self::with_board(config, board, renderer)
    }

    /// Start a session from an existing board, which must match the configured size.
    pub fn with_board(
        config: LifeConfig,
        board: Board,
        mut renderer: R,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        if board.size() != config.size {
            return Err(SessionError::SizeMismatch {
                expected: config.size,
                found: board.size(),
            });
        }

        renderer.draw(&board);
        log::debug!(
            "Session started on {}x{} board with {} live cells",
            config.size,
            config.size,
            board.population()
        );

        Ok(Self {
            config,
            board,
            generation: 0,
            rng: StdRng::from_entropy(),
            renderer,
        })
    }

    /// Use a fixed seed for [`Session::randomize`].
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Generations computed since the board was last replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Swap in a new board and notify the renderer of the difference.
    fn replace(&mut self, board: Board) -> ChangeSet {
        let changes = diff(&board, &self.board);
        self.board = board;
        self.generation = 0;
        self.renderer.repaint(&self.board, &changes);
        changes
    }

    /// Flip one cell. Returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, SessionError> {
        let alive = self.board.try_toggle(row, col)?;
        let changes = ChangeSet::single(Coordinate::new(row, col));
        self.renderer.repaint(&self.board, &changes);
        Ok(alive)
    }

    /// Toggle the cell under a board-space point. `Ok(None)` when the point is off the board.
    pub fn click(&mut self, x: f64, y: f64) -> Result<Option<bool>, SessionError> {
        match locate_click(x, y, self.config.size) {
            Some(cell) => self.toggle(cell.row, cell.col).map(Some),
            None => Ok(None),
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) -> ChangeSet {
        let changes = self.replace(Board::empty(self.config.size));
        log::info!("Cleared board ({} cells changed)", changes.len());
        changes
    }

    /// Replace the board with a fresh random one.
    pub fn randomize(&mut self) -> ChangeSet {
        let board = Board::random_with(self.config.size, &mut self.rng);
        let changes = self.replace(board);
        log::info!(
            "Randomized board ({} live, {} cells changed)",
            self.board.population(),
            changes.len()
        );
        changes
    }

    /// Advance one generation. Returns the new population.
    pub fn step(&mut self) -> usize {
        let result = advance(&self.board);
        self.board = result.board;
        self.generation += 1;
        self.renderer.repaint(&self.board, &result.changes);

        log::debug!(
            "Generation {}: {} live, {} changed",
            self.generation,
            result.population,
            result.changes.len()
        );
        result.population
    }

    /// Run up to `cycles` generations, checking [`Renderer::running`] before each one.
    pub fn run(&mut self, cycles: u32) -> RunSummary {
        let mut generations = 0;
        let mut population = self.board.population();
        let mut stopped_early = false;

        for _ in 0..cycles {
            if !self.renderer.running() {
                stopped_early = true;
                break;
            }
            population = self.step();
            generations += 1;
            self.renderer.tick();
        }

        if stopped_early {
            log::info!("Run stopped after {generations} of {cycles} generations");
        }

        RunSummary {
            generations,
            population,
            stopped_early,
        }
    }

    /// Parse a typed cycle count and run that many generations.
    pub fn run_typed(&mut self, text: &str) -> Result<RunSummary, SessionError> {
        let cycles = parse_cycles(text, self.config.max_cycles)?;
        Ok(self.run(cycles))
    }

    /// Replace the board with one read from `path`.
    ///
    /// On any error the current board is left exactly as it was.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<ChangeSet, SessionError> {
        let board = load_board(path, self.config.size)?;
        Ok(self.replace(board))
    }

    /// Write the current board to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SessionError> {
        save_board(path, &self.board)?;
        Ok(())
    }
}
