//! Error type shared by every engine operation.

use crate::game::types::{Direction, PlayerId, Point};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("there is no tile at {point}")]
    OutOfBounds { point: Point },

    #[error("there is no tile {direction} of {point}: edge of the board")]
    EdgeOfBoard { point: Point, direction: Direction },

    #[error("{0:?} is not a valid direction, expected up, down, left or right")]
    InvalidDirection(String),

    #[error("tile at {point} is already occupied")]
    OccupiedTile { point: Point },

    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),

    #[error("player {0} is already dead")]
    AlreadyDead(PlayerId),

    #[error("player id {0} is used more than once")]
    DuplicatePlayer(PlayerId),

    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },

    #[error("player count {count} must be within {min} and {max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
}

impl GameError {
    /// Stable code sent to clients alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            GameError::EdgeOfBoard { .. } => "EDGE_OF_BOARD",
            GameError::InvalidDirection(_) => "INVALID_DIRECTION",
            GameError::OccupiedTile { .. } => "OCCUPIED_TILE",
            GameError::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            GameError::AlreadyDead(_) => "ALREADY_DEAD",
            GameError::DuplicatePlayer(_) => "DUPLICATE_PLAYER",
            GameError::GridTooSmall { .. } => "GRID_TOO_SMALL",
            GameError::InvalidPlayerCount { .. } => "INVALID_PLAYER_COUNT",
        }
    }
}
