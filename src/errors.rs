use thiserror::Error;

use crate::grid::MazeLocation;

/// Error produced when building, parsing or configuring a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("A maze needs at least one row and one column, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Sparseness must be between 0 and 1, got {0}")]
    InvalidSparseness(f64),

    #[error("The {1} location {0} is outside the maze")]
    OutOfBounds(MazeLocation, &'static str),

    #[error("Unexpected maze cell {0:?} on line {1}")]
    UnknownCell(String, usize),

    #[error("Line {0} does not have the same width as the first line")]
    RaggedRow(usize),

    #[error("Maze has no {0} cell")]
    MissingMarker(&'static str),

    #[error("Maze has more than one {0} cell")]
    DuplicateMarker(&'static str),

    #[error("Invalid location literal: {0:?}")]
    InvalidLocation(String),

    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
