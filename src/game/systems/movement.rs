//! Player movement system.
//!
//! This module handles moving players on the grid.

use log::debug;

use crate::game::error::GameError;
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::types::{Direction, Entity, PlayerId, Point};

/// True if the tile next to the player towards `direction` is empty.
pub fn can_move(
    game_state: &GameState,
    player_id: PlayerId,
    direction: Direction,
) -> Result<bool, GameError> {
    let player = game_state.alive_player(player_id)?;
    game_state.grid.can_move(player.position, direction)
}

/// Move the specified player one tile in the given direction.
///
/// The destination must be empty. On success the player faces `direction`;
/// a rejected move leaves position and facing untouched. Returns the new position.
pub fn move_in_direction(
    game_state: &mut GameState,
    player_id: PlayerId,
    direction: Direction,
) -> Result<Point, GameError> {
    let from = game_state.alive_player(player_id)?.position;
    let to = game_state.grid.neighbor(from, direction)?;
    if !game_state.grid.tile_at(to)?.is_empty() {
        return Err(GameError::OccupiedTile { point: to });
    }

    game_state.grid.clear(from)?;
    game_state.grid.fill(to, Entity::Player { id: player_id })?;

    let player = game_state.player_mut(player_id)?;
    player.position = to;
    player.facing = direction;

    debug!("[Movement] Player {} moved {} from {} to {}", player_id, direction, from, to);
    game_state.events.push(GameEvent::PlayerMoved {
        player: player_id,
        from,
        to,
    });
    Ok(to)
}
