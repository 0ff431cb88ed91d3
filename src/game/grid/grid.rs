//! Square grid permanently walled on its border.
//!
//! Rows are stored top to bottom, so a point `(x, y)` lives at `contents[y][x]`.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::config::game::MIN_GRID_SIZE;
use crate::game::error::GameError;
use crate::game::grid::tile::Tile;
use crate::game::types::{Direction, Entity, Point};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    contents: Vec<Vec<Tile>>,
}

impl Grid {
    /// Build an empty grid of `size` x `size` tiles with walls all around.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_GRID_SIZE {
            return Err(GameError::GridTooSmall { size, min: MIN_GRID_SIZE });
        }

        let contents = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| {
                        if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                            Tile::with(Entity::Wall { facing: Direction::Down })
                        } else {
                            Tile::default()
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(Self { size, contents })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.contents
    }

    pub fn contains(&self, point: Point) -> bool {
        let size = self.size as i32;
        (0..size).contains(&point.x) && (0..size).contains(&point.y)
    }

    pub fn is_border(&self, point: Point) -> bool {
        let last = self.size as i32 - 1;
        self.contains(point) && (point.x == 0 || point.y == 0 || point.x == last || point.y == last)
    }

    /// Collision-free integer key for a valid point.
    fn key(&self, point: Point) -> usize {
        point.y as usize * self.size + point.x as usize
    }

    pub fn tile_at(&self, point: Point) -> Result<&Tile, GameError> {
        if !self.contains(point) {
            return Err(GameError::OutOfBounds { point });
        }
        Ok(&self.contents[point.y as usize][point.x as usize])
    }

    fn tile_at_mut(&mut self, point: Point) -> Result<&mut Tile, GameError> {
        if !self.contains(point) {
            return Err(GameError::OutOfBounds { point });
        }
        Ok(&mut self.contents[point.y as usize][point.x as usize])
    }

    /// The neighbouring point towards `direction`.
    ///
    /// Fails with `OutOfBounds` when `point` itself is not on the grid and with
    /// `EdgeOfBoard` when it already sits on the boundary in that direction.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Result<Point, GameError> {
        if !self.contains(point) {
            return Err(GameError::OutOfBounds { point });
        }
        let last = self.size as i32 - 1;
        let at_edge = match direction {
            Direction::Up => point.y == 0,
            Direction::Down => point.y == last,
            Direction::Left => point.x == 0,
            Direction::Right => point.x == last,
        };
        if at_edge {
            return Err(GameError::EdgeOfBoard { point, direction });
        }
        Ok(point.step(direction))
    }

    pub fn tile_above(&self, point: Point) -> Result<&Tile, GameError> {
        self.tile_at(self.neighbor(point, Direction::Up)?)
    }

    pub fn tile_below(&self, point: Point) -> Result<&Tile, GameError> {
        self.tile_at(self.neighbor(point, Direction::Down)?)
    }

    pub fn tile_left_of(&self, point: Point) -> Result<&Tile, GameError> {
        self.tile_at(self.neighbor(point, Direction::Left)?)
    }

    pub fn tile_right_of(&self, point: Point) -> Result<&Tile, GameError> {
        self.tile_at(self.neighbor(point, Direction::Right)?)
    }

    /// True if the tile next to `point` towards `direction` is empty.
    pub fn can_move(&self, point: Point, direction: Direction) -> Result<bool, GameError> {
        let tile = match direction {
            Direction::Up => self.tile_above(point)?,
            Direction::Down => self.tile_below(point)?,
            Direction::Left => self.tile_left_of(point)?,
            Direction::Right => self.tile_right_of(point)?,
        };
        Ok(tile.is_empty())
    }

    /// Place `occupant` on the tile at `point`. Never overwrites.
    pub fn fill(&mut self, point: Point, occupant: Entity) -> Result<(), GameError> {
        self.tile_at_mut(point)?
            .fill(occupant)
            .map_err(|_| GameError::OccupiedTile { point })
    }

    /// Remove and return the occupant at `point`. Border walls are permanent and
    /// are never cleared.
    pub fn clear(&mut self, point: Point) -> Result<Option<Entity>, GameError> {
        if self.is_border(point) {
            return Ok(None);
        }
        Ok(self.tile_at_mut(point)?.clear())
    }

    /// Breadth-first search for a wall-free path from `a` to `b`.
    ///
    /// Players and bombs do not block passage. Two distinct points are never
    /// connected if either of them holds a wall, which keeps the relation symmetric.
    pub fn reachable(&self, a: Point, b: Point) -> Result<bool, GameError> {
        let passable_a = self.tile_at(a)?.is_passable();
        let passable_b = self.tile_at(b)?.is_passable();
        if a == b {
            return Ok(true);
        }
        if !passable_a || !passable_b {
            return Ok(false);
        }
        Ok(self.flood(a, Some(b))?.0)
    }

    /// Number of wall-free tiles connected to `start`, `start` included.
    pub fn region_size(&self, start: Point) -> Result<usize, GameError> {
        self.tile_at(start)?;
        Ok(self.flood(start, None)?.1)
    }

    /// Flood outwards from `start` until `target` is dequeued or the region is
    /// exhausted. Returns whether the target was found and how many tiles were
    /// discovered.
    fn flood(&self, start: Point, target: Option<Point>) -> Result<(bool, usize), GameError> {
        let mut queue = VecDeque::with_capacity(self.size * self.size);
        let mut discovered = HashSet::with_capacity(self.size * self.size);
        discovered.insert(self.key(start));
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if Some(current) == target {
                return Ok((true, discovered.len()));
            }
            for direction in Direction::ALL {
                // Edges are always walled, so a missing neighbour is simply skipped.
                let Ok(next) = self.neighbor(current, direction) else {
                    continue;
                };
                if self.tile_at(next)?.is_passable() && discovered.insert(self.key(next)) {
                    queue.push_back(next);
                }
            }
        }

        Ok((false, discovered.len()))
    }
}
