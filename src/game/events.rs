//! Things that happened during a tick, reported back to the driver.

use serde::{Deserialize, Serialize};

use crate::game::entities::Bomb;
use crate::game::types::{Direction, PlayerId, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EliminationCause {
    /// Caught next to an exploding bomb.
    Explosion { at: Point },
    /// No wall-free path left to any other live player.
    Trapped,
    /// Removed through a direct call, outside the tick rules.
    Direct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerMoved {
        player: PlayerId,
        from: Point,
        to: Point,
    },
    BombDropped {
        bomb: Bomb,
    },
    BombExploded {
        position: Point,
        facing: Direction,
        garbage: Vec<Point>,
    },
    BombDefused {
        bomb: Bomb,
    },
    PlayerEliminated {
        player: PlayerId,
        position: Point,
        cause: EliminationCause,
    },
}
