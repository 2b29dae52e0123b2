//! Error types for the simulation core

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by board construction, pattern placement and the pattern library
#[derive(Debug, Error)]
pub enum LifeError {
    /// Board dimensions must both be positive
    #[error("invalid board dimensions {rows}x{cols}: rows and cols must be positive")]
    Configuration { rows: usize, cols: usize },

    /// Pattern bounding box does not fit on the board
    #[error("pattern of size {height}x{width} does not fit on a {rows}x{cols} board")]
    Size {
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },

    /// Pattern library file could not be written
    #[error("failed to write pattern library {}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Name is reserved for the hand-edited layout and cannot be stored
    #[error("pattern name '{0}' is reserved")]
    ReservedName(String),

    /// Requested pattern is not in the library
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

pub type LifeResult<T> = Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LifeError::ReservedName("Set by hand".to_string()).to_string(),
            "pattern name 'Set by hand' is reserved"
        );
        assert_eq!(
            LifeError::UnknownPattern("glider".to_string()).to_string(),
            "unknown pattern 'glider'"
        );
        assert_eq!(
            LifeError::Configuration { rows: 0, cols: 3 }.to_string(),
            "invalid board dimensions 0x3: rows and cols must be positive"
        );
    }
}
