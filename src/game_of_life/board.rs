//! Toroidal board topology

use crate::error::{LifeError, LifeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A board coordinate as `(row, col)`
pub type Cell = (usize, usize);

/// The set of living cells; replaced wholesale every generation
pub type AliveSet = BTreeSet<Cell>;

/// Fixed-size grid whose edges wrap around on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create a new board, rejecting zero-sized dimensions
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::Configuration { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.rows && cell.1 < self.cols
    }

    /// Wrapped Moore neighbourhood of `cell`.
    ///
    /// Coordinates are deduplicated and never include `cell` itself, so boards
    /// narrower than three cells on an axis yield fewer than eight neighbours.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let (row, col) = (cell.0 % self.rows, cell.1 % self.cols);
        let origin = (row, col);
        let rows = [wrap_prev(row, self.rows), row, wrap_next(row, self.rows)];
        let cols = [wrap_prev(col, self.cols), col, wrap_next(col, self.cols)];
        let mut result = Vec::with_capacity(8);

        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                if i == 1 && j == 1 {
                    continue;
                }

                let neighbor = (r, c);
                if neighbor != origin && !result.contains(&neighbor) {
                    result.push(neighbor);
                }
            }
        }

        result
    }

    /// Count how many neighbours of `cell` are members of `alive`
    pub fn count_alive_neighbors(&self, cell: Cell, alive: &AliveSet) -> u8 {
        self.neighbors(cell)
            .iter()
            .filter(|neighbor| alive.contains(neighbor))
            .count() as u8
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }
}

/// Step of -1 modulo `dim` for `index < dim`, without overflow
#[inline]
fn wrap_prev(index: usize, dim: usize) -> usize {
    if index == 0 {
        dim - 1
    } else {
        index - 1
    }
}

/// Step of +1 modulo `dim` for `index < dim`, without overflow
#[inline]
fn wrap_next(index: usize, dim: usize) -> usize {
    if index + 1 == dim {
        0
    } else {
        index + 1
    }
}
