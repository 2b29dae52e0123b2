//! Driver-owned simulation session
//!
//! Holds the authoritative alive set for a display shell together with the
//! layout that "stop" restores, and tracks whether the world is being edited,
//! animated or paused. The simulation core itself stays stateless.

use crate::error::{LifeError, LifeResult};
use crate::game_of_life::{
    AliveSet, Board, Cell, GenerationEngine, PatternCentering, PatternLibrary, MANUAL_PATTERN,
};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Cells may be toggled; nothing advances on tick
    Editing,
    /// Every tick advances one generation; edits are ignored
    Running,
    /// Stopped mid-run; edits allowed, ticks ignored
    Paused,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    alive: AliveSet,
    initial: AliveSet,
    state: SessionState,
    selected: String,
    generation: u64,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            alive: AliveSet::new(),
            initial: AliveSet::new(),
            state: SessionState::Editing,
            selected: MANUAL_PATTERN.to_string(),
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn alive(&self) -> &AliveSet {
        &self.alive
    }

    /// Layout restored by [`Session::stop`]
    pub fn initial(&self) -> &AliveSet {
        &self.initial
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply an explicit layout, centered; on error nothing changes
    pub fn apply_cells(&mut self, cells: &[(i64, i64)]) -> LifeResult<()> {
        let placed = PatternCentering::place(&self.board, cells)?;
        self.reset_to(placed);
        Ok(())
    }

    /// Select a named pattern from the library.
    ///
    /// The sentinel name keeps the cells currently on the board and makes them
    /// the restore point, so hand edits survive.
    pub fn select_pattern(&mut self, library: &PatternLibrary, name: &str) -> LifeResult<()> {
        if name == MANUAL_PATTERN {
            let current = self.alive.clone();
            self.reset_to(current);
        } else {
            let cells = library
                .get(name)
                .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))?;
            self.apply_cells(&cells)?;
        }
        self.selected = name.to_string();
        Ok(())
    }

    /// Flip one cell. Ignored while running; the edit also becomes the restore point.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.state == SessionState::Running || !self.board.contains(cell) {
            return false;
        }
        self.alive = PatternCentering::toggle(&self.board, &self.alive, cell);
        self.initial = self.alive.clone();
        true
    }

    pub fn run(&mut self) {
        self.state = SessionState::Running;
    }

    pub fn pause(&mut self) {
        if self.state == SessionState::Running {
            self.state = SessionState::Paused;
        }
    }

    /// Restore the last applied layout and return to editing
    pub fn stop(&mut self) {
        self.alive = self.initial.clone();
        self.state = SessionState::Editing;
        self.generation = 0;
    }

    /// Animation callback: advance one generation only while running
    pub fn tick(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.advance();
        true
    }

    /// Advance exactly one generation and leave the session paused
    pub fn step_once(&mut self) {
        self.advance();
        self.state = SessionState::Paused;
    }

    /// Persist the current restore point under `name`
    pub fn save_initial(&mut self, library: &PatternLibrary, name: &str) -> LifeResult<()> {
        let cells = PatternCentering::explicit_cells(&self.initial);
        library.save(name, &cells)?;
        self.selected = name.to_string();
        Ok(())
    }

    fn reset_to(&mut self, alive: AliveSet) {
        self.initial = alive.clone();
        self.alive = alive;
        self.state = SessionState::Editing;
        self.generation = 0;
    }

    fn advance(&mut self) {
        // The next generation is computed in full before it replaces the current set
        let next = GenerationEngine::step(&self.board, &self.alive);
        self.alive = next;
        self.generation += 1;
        debug!("generation {}: {} alive", self.generation, self.alive.len());
    }
}
