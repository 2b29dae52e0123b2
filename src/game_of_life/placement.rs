//! Centered placement of explicit patterns and single-cell edits

use super::board::{AliveSet, Board, Cell};
use crate::error::{LifeError, LifeResult};
use itertools::Itertools;

/// Explicit alive coordinates in a pattern's own coordinate space
pub type ExplicitCells = Vec<(i64, i64)>;

/// Inclusive bounds of an explicit cell layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: i64,
    pub max_row: i64,
    pub min_col: i64,
    pub max_col: i64,
}

impl BoundingBox {
    pub fn height(&self) -> usize {
        (self.max_row.abs_diff(self.min_row) as usize).saturating_add(1)
    }

    pub fn width(&self) -> usize {
        (self.max_col.abs_diff(self.min_col) as usize).saturating_add(1)
    }
}

/// Places patterns on a board and applies manual edits
pub struct PatternCentering;

impl PatternCentering {
    /// Compute the bounding box of a layout, `None` when it is empty
    pub fn bounding_box(cells: &[(i64, i64)]) -> Option<BoundingBox> {
        let (min_row, max_row) = cells.iter().map(|&(row, _)| row).minmax().into_option()?;
        let (min_col, max_col) = cells.iter().map(|&(_, col)| col).minmax().into_option()?;
        Some(BoundingBox {
            min_row,
            max_row,
            min_col,
            max_col,
        })
    }

    /// Center `cells` on the board, producing a brand-new alive set.
    ///
    /// Any odd leftover offset goes to the bottom/right. A layout larger than
    /// the board is rejected without producing a partial result.
    pub fn place(board: &Board, cells: &[(i64, i64)]) -> LifeResult<AliveSet> {
        let Some(bounds) = Self::bounding_box(cells) else {
            return Ok(AliveSet::new());
        };

        let (height, width) = (bounds.height(), bounds.width());
        if height > board.rows() || width > board.cols() {
            return Err(LifeError::Size {
                height,
                width,
                rows: board.rows(),
                cols: board.cols(),
            });
        }

        let row_offset = (board.rows() - height) / 2;
        let col_offset = (board.cols() - width) / 2;

        Ok(cells
            .iter()
            .map(|&(row, col)| {
                (
                    row.abs_diff(bounds.min_row) as usize + row_offset,
                    col.abs_diff(bounds.min_col) as usize + col_offset,
                )
            })
            .collect())
    }

    /// Flip the membership of `cell`; out-of-bounds cells leave the set unchanged
    pub fn toggle(board: &Board, alive: &AliveSet, cell: Cell) -> AliveSet {
        let mut next = alive.clone();
        if board.contains(cell) && !next.remove(&cell) {
            next.insert(cell);
        }
        next
    }

    /// Convert an alive set back into an explicit layout, in row-major order
    pub fn explicit_cells(alive: &AliveSet) -> ExplicitCells {
        alive
            .iter()
            .map(|&(row, col)| (row as i64, col as i64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        assert_eq!(PatternCentering::bounding_box(&[]), None);

        let bounds = PatternCentering::bounding_box(&[(3, -2), (5, 4), (4, 0)]).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                min_row: 3,
                max_row: 5,
                min_col: -2,
                max_col: 4
            }
        );
        assert_eq!(bounds.height(), 3);
        assert_eq!(bounds.width(), 7);
    }

    #[test]
    fn test_centering_pair() {
        let board = Board::new(4, 4).unwrap();
        let placed = PatternCentering::place(&board, &[(0, 0), (0, 1)]).unwrap();
        let expected: AliveSet = [(1, 1), (1, 2)].into_iter().collect();
        assert_eq!(placed, expected);
    }

    #[test]
    fn test_centering_ignores_origin() {
        let board = Board::new(9, 11).unwrap();
        let near = PatternCentering::place(&board, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]).unwrap();
        let far = PatternCentering::place(
            &board,
            &[(100, -49), (101, -48), (102, -50), (102, -49), (102, -48)],
        )
        .unwrap();
        assert_eq!(near, far);
        assert!(near.contains(&(3, 5)));
        assert!(near.contains(&(5, 4)));
    }

    #[test]
    fn test_odd_leftover_goes_bottom_right() {
        let board = Board::new(5, 6).unwrap();
        // 2x3 box leaves 3 spare rows and 3 spare cols
        let placed = PatternCentering::place(&board, &[(0, 0), (1, 2)]).unwrap();
        let expected: AliveSet = [(1, 1), (2, 3)].into_iter().collect();
        assert_eq!(placed, expected);
    }

    #[test]
    fn test_empty_pattern_clears() {
        let board = Board::new(3, 3).unwrap();
        assert!(PatternCentering::place(&board, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_exact_fit() {
        let board = Board::new(2, 3).unwrap();
        let placed = PatternCentering::place(&board, &[(7, 7), (8, 9)]).unwrap();
        let expected: AliveSet = [(0, 0), (1, 2)].into_iter().collect();
        assert_eq!(placed, expected);
    }

    #[test]
    fn test_oversized_pattern_rejected() {
        let board = Board::new(4, 4).unwrap();
        let previous: AliveSet = [(0, 0)].into_iter().collect();

        let mut current = previous.clone();
        let tall = PatternCentering::place(&board, &[(0, 0), (4, 0)]);
        assert!(matches!(
            tall,
            Err(LifeError::Size {
                height: 5,
                width: 1,
                ..
            })
        ));
        if let Ok(placed) = tall {
            current = placed;
        }
        assert_eq!(current, previous);

        let wide = PatternCentering::place(&board, &[(0, -1), (0, 3)]);
        assert!(matches!(wide, Err(LifeError::Size { width: 5, .. })));
    }

    #[test]
    fn test_toggle() {
        let board = Board::new(3, 3).unwrap();
        let empty = AliveSet::new();

        let one = PatternCentering::toggle(&board, &empty, (1, 2));
        assert!(one.contains(&(1, 2)));
        assert!(empty.is_empty());

        let back = PatternCentering::toggle(&board, &one, (1, 2));
        assert!(back.is_empty());

        let ignored = PatternCentering::toggle(&board, &one, (3, 0));
        assert_eq!(ignored, one);
    }

    #[test]
    fn test_explicit_cells() {
        let alive: AliveSet = [(2, 1), (0, 3)].into_iter().collect();
        assert_eq!(PatternCentering::explicit_cells(&alive), vec![(0, 3), (2, 1)]);
    }
}
