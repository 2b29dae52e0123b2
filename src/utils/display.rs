//! Display and layout text utilities

use crate::game_of_life::{AliveSet, Board, ExplicitCells};
use anyhow::Result;

/// Format alive sets for display
pub struct BoardFormatter;

impl BoardFormatter {
    /// Render the board compactly, one text row per board row
    pub fn format_alive_set(board: &Board, alive: &AliveSet) -> String {
        let mut output = String::with_capacity(board.rows() * (board.cols() + 1) * 2);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                output.push(if alive.contains(&(row, col)) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with coordinates
    pub fn format_with_coords(board: &Board, alive: &AliveSet) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..board.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..board.rows() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..board.cols() {
                output.push_str(if alive.contains(&(row, col)) { " █" } else { " ·" });
            }
            output.push('\n');
        }

        output
    }

    /// Parse a text layout into explicit cells.
    ///
    /// `1`, `#`, `O` and `█` mark alive cells; `0`, `.`, `·` and spaces are dead.
    /// Rows may have different lengths. Blank lines still count as rows.
    pub fn parse_layout(content: &str) -> Result<ExplicitCells> {
        let mut cells = ExplicitCells::new();

        for (row, line) in content.lines().enumerate() {
            for (col, ch) in line.trim_end().chars().enumerate() {
                match ch {
                    '1' | '#' | 'O' | '█' => cells.push((row as i64, col as i64)),
                    '0' | '.' | '·' | ' ' => {}
                    _ => anyhow::bail!(
                        "Invalid character '{}' at position ({}, {})",
                        ch,
                        row,
                        col
                    ),
                }
            }
        }

        Ok(cells)
    }
}

/// Colored output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
