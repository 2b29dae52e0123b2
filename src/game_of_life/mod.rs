//! Game of Life core functionality

pub mod board;
pub mod engine;
pub mod library;
pub mod placement;

pub use board::{AliveSet, Board, Cell};
pub use engine::GenerationEngine;
pub use library::{PatternLibrary, PatternMap, MANUAL_PATTERN};
pub use placement::{BoundingBox, ExplicitCells, PatternCentering};
