//! Game state orchestrator.
//!
//! Owns the grid, the player roster and the bomb schedule, and runs the
//! per-tick procedure over them.

use std::collections::HashMap;

use log::{debug, info};
use serde::Serialize;

use crate::config::GameConfig;
use crate::game::actions::TickActions;
use crate::game::entities::{spawn_players, BombSchedule, Player};
use crate::game::error::GameError;
use crate::game::events::GameEvent;
use crate::game::grid::Grid;
use crate::game::systems::{
    can_drop_bomb, can_move, drop_bomb, log_grid, move_in_direction, prune_isolated,
    resolve_explosion, winners,
};
use crate::game::types::{Direction, Entity, PlayerId, Tick};

#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) players: Vec<Player>,
    #[serde(skip)]
    pub(crate) index: HashMap<PlayerId, usize>,
    pub(crate) bombs: BombSchedule,
    pub(crate) tick: Tick,
    pub(crate) fuse_ticks: Tick,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

/// Outcome of one call to [`GameState::tick`].
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub tick: Tick,
    pub events: Vec<GameEvent>,
    /// `None` while two or more players are alive.
    pub winners: Option<Vec<Player>>,
}

impl GameState {
    /// Create a new game: walled grid, players on the interior corners facing down.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.grid_size)?;
        let players = spawn_players(config.grid_size, config.player_count);
        let state = Self::from_parts(grid, players, config.fuse_ticks)?;
        info!(
            "[GameState] New game: grid={}x{} players={} fuse_ticks={}",
            config.grid_size, config.grid_size, config.player_count, config.fuse_ticks
        );
        Ok(state)
    }

    /// Build a state from an existing grid and roster. Alive players are placed
    /// on their tiles; dead ones are expected to be represented by the grid already.
    pub fn from_parts(
        mut grid: Grid,
        players: Vec<Player>,
        fuse_ticks: Tick,
    ) -> Result<Self, GameError> {
        let mut index = HashMap::with_capacity(players.len());
        for (i, player) in players.iter().enumerate() {
            if index.insert(player.id, i).is_some() {
                return Err(GameError::DuplicatePlayer(player.id));
            }
            if player.is_alive {
                grid.fill(player.position, Entity::Player { id: player.id })?;
            }
        }

        Ok(Self {
            grid,
            players,
            index,
            bombs: BombSchedule::new(),
            tick: 0,
            fuse_ticks,
            events: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn bombs(&self) -> &BombSchedule {
        &self.bombs
    }

    /// Number of ticks already processed.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn fuse_ticks(&self) -> Tick {
        self.fuse_ticks
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.index
            .get(&id)
            .map(|&i| &self.players[i])
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        match self.index.get(&id) {
            Some(&i) => Ok(&mut self.players[i]),
            None => Err(GameError::UnknownPlayer(id)),
        }
    }

    /// Like [`GameState::player`], but also rejects dead players.
    pub fn alive_player(&self, id: PlayerId) -> Result<&Player, GameError> {
        let player = self.player(id)?;
        if !player.is_alive {
            return Err(GameError::AlreadyDead(id));
        }
        Ok(player)
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive)
    }

    /// Events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the simulation by one tick.
    ///
    /// Moves are applied first, then bomb drops, then every bomb due at this
    /// tick explodes, and finally trapped players are eliminated.
    pub fn tick(&mut self, actions: &TickActions) -> Result<TickReport, GameError> {
        let now = self.tick;

        for direction in Direction::ALL {
            for i in 0..self.players.len() {
                let player = &self.players[i];
                if !player.is_alive || !actions.get(player.id).pressed(direction) {
                    continue;
                }
                let id = player.id;
                if can_move(self, id, direction)? {
                    move_in_direction(self, id, direction)?;
                }
            }
        }

        let fuse = self.fuse_ticks();
        for i in 0..self.players.len() {
            let player = &self.players[i];
            if !player.is_alive || !actions.get(player.id).bomb {
                continue;
            }
            let id = player.id;
            if can_drop_bomb(self, id)? {
                drop_bomb(self, id, fuse)?;
            }
        }

        for bomb in self.bombs.take_due(now) {
            resolve_explosion(self, bomb.position, bomb.facing)?;
        }

        prune_isolated(self)?;

        self.tick += 1;
        let events = self.take_events();
        let winners = winners(self);
        debug!(
            "[GameState] Tick {} resolved: events={} pending_bombs={} alive={}",
            now,
            events.len(),
            self.bombs.pending().len(),
            self.alive_players().count()
        );
        log_grid(&self.grid);

        Ok(TickReport {
            tick: now,
            events,
            winners,
        })
    }
}
