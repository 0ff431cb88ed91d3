use serde::{Deserialize, Serialize};

use crate::game::types::Entity;

/// A single grid cell holding at most one occupant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    occupant: Option<Entity>,
}

impl Tile {
    pub fn with(occupant: Entity) -> Self {
        Self { occupant: Some(occupant) }
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn occupant(&self) -> Option<&Entity> {
        self.occupant.as_ref()
    }

    /// A tile can be walked through by reachability unless it holds a wall.
    pub fn is_passable(&self) -> bool {
        !matches!(self.occupant, Some(Entity::Wall { .. }))
    }

    /// Place `occupant` on an empty tile. An occupied tile is left untouched and
    /// its current occupant is returned as the error.
    pub fn fill(&mut self, occupant: Entity) -> Result<(), Entity> {
        match self.occupant {
            Some(current) => Err(current),
            None => {
                self.occupant = Some(occupant);
                Ok(())
            }
        }
    }

    pub fn clear(&mut self) -> Option<Entity> {
        self.occupant.take()
    }
}
