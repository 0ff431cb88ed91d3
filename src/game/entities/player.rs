use serde::{Deserialize, Serialize};

use crate::game::types::{Direction, PlayerId, Point};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: Point,
    pub facing: Direction,
    pub is_alive: bool,
}

impl Player {
    pub fn new(id: PlayerId, position: Point) -> Self {
        Self::with_facing(id, position, Direction::Down)
    }

    pub fn with_facing(id: PlayerId, position: Point, facing: Direction) -> Self {
        Self {
            id,
            position,
            facing,
            is_alive: true,
        }
    }
}

/// The four interior corners of a grid of side `size`, in spawn order.
pub fn spawn_corners(size: usize) -> [Point; 4] {
    let far = size as i32 - 2;
    [
        Point::new(1, 1),
        Point::new(1, far),
        Point::new(far, far),
        Point::new(far, 1),
    ]
}

/// Generate `count` players on the interior corners, ids starting at 0.
/// Callers validate `count` against the number of corners beforehand.
pub fn spawn_players(size: usize, count: usize) -> Vec<Player> {
    spawn_corners(size)
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, pos)| Player::new(i as PlayerId, pos))
        .collect()
}
