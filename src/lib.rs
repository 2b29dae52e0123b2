//! Toroidal Game of Life
//!
//! This library provides the simulation core for Conway's Game of Life on a
//! wrap-around board: neighbour topology, the generation rule, centered
//! placement of explicit patterns and a JSON-backed pattern library.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{
    AliveSet, Board, Cell, GenerationEngine, PatternCentering, PatternLibrary, MANUAL_PATTERN,
};
pub use session::{Session, SessionState};

/// Construct a board, failing on zero-sized dimensions
pub fn new_board(rows: usize, cols: usize) -> LifeResult<Board> {
    Board::new(rows, cols)
}

/// Center an explicit layout on the board
pub fn place(board: &Board, cells: &[(i64, i64)]) -> LifeResult<AliveSet> {
    PatternCentering::place(board, cells)
}

/// Flip one cell; out-of-bounds cells are ignored
pub fn toggle(board: &Board, alive: &AliveSet, cell: Cell) -> AliveSet {
    PatternCentering::toggle(board, alive, cell)
}

/// Advance one generation
pub fn step(board: &Board, alive: &AliveSet) -> AliveSet {
    GenerationEngine::step(board, alive)
}
