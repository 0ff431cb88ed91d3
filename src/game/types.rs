use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::error::GameError;

pub type PlayerId = u8;
pub type BombId = u32;
/// Simulation time, counted in ticks since the game started.
pub type Tick = u64;

/// A cell coordinate. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn above(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    pub fn below(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    pub fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    pub fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// The adjacent point one step towards `direction`.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.above(),
            Direction::Down => self.below(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

/// Anything that can sit on a tile.
///
/// Players and bombs are stored by id; the roster and the bomb schedule own
/// the full records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Wall { facing: Direction },
    Player { id: PlayerId },
    Bomb { id: BombId },
}

impl Entity {
    pub fn is_wall(&self) -> bool {
        matches!(self, Entity::Wall { .. })
    }

    /// Single-character symbol used by the diagnostic text grid.
    pub fn symbol(&self) -> char {
        match self {
            Entity::Wall { .. } => 'W',
            Entity::Player { .. } => 'P',
            Entity::Bomb { .. } => 'B',
        }
    }
}
