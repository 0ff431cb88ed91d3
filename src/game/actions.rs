//! Per-tick input snapshot handed to the engine by the driver.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::types::{Direction, PlayerId};

/// Buttons one player pressed during a tick. Any subset may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub bomb: bool,
}

impl PlayerInput {
    pub fn pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickActions {
    inputs: BTreeMap<PlayerId, PlayerInput>,
}

impl TickActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, player: PlayerId, input: PlayerInput) {
        self.inputs.insert(player, input);
    }

    /// Mutable input for `player`, starting from an idle one.
    pub fn input_mut(&mut self, player: PlayerId) -> &mut PlayerInput {
        self.inputs.entry(player).or_default()
    }

    pub fn get(&self, player: PlayerId) -> PlayerInput {
        self.inputs.get(&player).copied().unwrap_or_default()
    }
}
