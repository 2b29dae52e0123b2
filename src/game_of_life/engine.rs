//! Game of Life transition rule on a toroidal board

use super::board::{AliveSet, Board, Cell};
use log::debug;
use rayon::prelude::*;

/// Game of Life generation engine
pub struct GenerationEngine;

impl GenerationEngine {
    /// Advance `alive` by one generation.
    ///
    /// Only live cells and their dead neighbours are examined, since a cell
    /// with no live neighbour can never be born. The input is left untouched
    /// and a fresh set is returned.
    pub fn step(board: &Board, alive: &AliveSet) -> AliveSet {
        let mut next = AliveSet::new();
        let mut candidates = AliveSet::new();

        for &cell in alive {
            let neighbors = board.neighbors(cell);
            let count = neighbors.iter().filter(|n| alive.contains(n)).count() as u8;
            if Self::should_be_alive(true, count) {
                next.insert(cell);
            }

            candidates.extend(neighbors.into_iter().filter(|n| !alive.contains(n)));
        }

        for &cell in &candidates {
            if Self::should_be_alive(false, board.count_alive_neighbors(cell, alive)) {
                next.insert(cell);
            }
        }

        debug!(
            "step: {} alive, {} candidates -> {} alive",
            alive.len(),
            candidates.len(),
            next.len()
        );
        next
    }

    /// Brute-force variant that evaluates every cell on the board.
    ///
    /// Produces the same result as [`GenerationEngine::step`].
    pub fn step_reference(board: &Board, alive: &AliveSet) -> AliveSet {
        (0..board.rows())
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..board.cols()).filter_map(move |col| {
                    let cell: Cell = (row, col);
                    let count = board.count_alive_neighbors(cell, alive);
                    Self::should_be_alive(alive.contains(&cell), count).then_some(cell)
                })
            })
            .collect()
    }

    /// Evolve the set for multiple generations
    pub fn evolve_generations(board: &Board, alive: &AliveSet, generations: usize) -> AliveSet {
        let mut current = alive.clone();
        for _ in 0..generations {
            current = Self::step(board, &current);
        }
        current
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}
