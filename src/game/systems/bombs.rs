//! Bomb system.
//!
//! Dropping bombs in front of players, resolving their explosions and the
//! defuse hook.

use log::{debug, info};

use crate::game::entities::Bomb;
use crate::game::error::GameError;
use crate::game::events::{EliminationCause, GameEvent};
use crate::game::state::GameState;
use crate::game::systems::rules::eliminate_with_cause;
use crate::game::types::{Direction, Entity, PlayerId, Point, Tick};

/// True if the cell the player faces is empty, i.e. a bomb could go there.
pub fn can_drop_bomb(game_state: &GameState, player_id: PlayerId) -> Result<bool, GameError> {
    let player = game_state.alive_player(player_id)?;
    game_state.grid.can_move(player.position, player.facing)
}

/// Drop a bomb into the cell the player faces. It explodes once `fuse` ticks
/// have elapsed and cannot be moved afterwards.
pub fn drop_bomb(
    game_state: &mut GameState,
    player_id: PlayerId,
    fuse: Tick,
) -> Result<Bomb, GameError> {
    let player = game_state.alive_player(player_id)?;
    let facing = player.facing;
    let position = game_state.grid.neighbor(player.position, facing)?;
    if !game_state.grid.tile_at(position)?.is_empty() {
        return Err(GameError::OccupiedTile { point: position });
    }

    let deadline = game_state.tick + fuse;
    let bomb = game_state.bombs.schedule(player_id, position, facing, deadline);
    game_state.grid.fill(position, Entity::Bomb { id: bomb.id })?;

    debug!(
        "[Bombs] Player {} dropped bomb {} at {} facing {} (deadline tick {})",
        player_id, bomb.id, position, facing, deadline
    );
    game_state.events.push(GameEvent::BombDropped { bomb });
    Ok(bomb)
}

/// Directions an explosion reaches: everything except behind the dropper.
pub fn blast_directions(facing: Direction) -> impl Iterator<Item = Direction> {
    let behind = facing.reverse();
    Direction::ALL.into_iter().filter(move |d| *d != behind)
}

/// Blow up the bomb at `position`.
///
/// Each cell adjacent to the bomb in a blast direction becomes a wall if it was
/// empty, eliminates the player standing on it, or is left alone otherwise. The
/// blast goes one cell deep and never sets off other bombs. Returns the ids of
/// the players hit.
pub fn resolve_explosion(
    game_state: &mut GameState,
    position: Point,
    facing: Direction,
) -> Result<Vec<PlayerId>, GameError> {
    game_state.grid.clear(position)?;

    let mut garbage = Vec::new();
    let mut hit = Vec::new();
    for direction in blast_directions(facing) {
        let target = match game_state.grid.neighbor(position, direction) {
            Ok(target) => target,
            Err(GameError::EdgeOfBoard { .. }) => continue,
            Err(e) => return Err(e),
        };
        match game_state.grid.fill(target, Entity::Wall { facing: direction }) {
            Ok(()) => garbage.push(target),
            Err(GameError::OccupiedTile { .. }) => {
                let occupant = game_state.grid.tile_at(target)?.occupant().copied();
                if let Some(Entity::Player { id }) = occupant {
                    info!("[Bombs] Explosion at {} hit player {}", position, id);
                    eliminate_with_cause(game_state, id, EliminationCause::Explosion { at: position })?;
                    hit.push(id);
                }
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "[Bombs] Bomb at {} exploded: garbage={:?} hit={:?}",
        position, garbage, hit
    );
    game_state.events.push(GameEvent::BombExploded {
        position,
        facing,
        garbage,
    });
    Ok(hit)
}

/// Cancel the pending bomb at `position` and clear its tile. The tick
/// procedure never calls this; it exists for drivers that want defusing.
pub fn defuse_bomb(game_state: &mut GameState, position: Point) -> Result<Option<Bomb>, GameError> {
    let Some(bomb) = game_state.bombs.cancel_at(position) else {
        return Ok(None);
    };
    let occupant = game_state.grid.tile_at(position)?.occupant().copied();
    if occupant == Some(Entity::Bomb { id: bomb.id }) {
        game_state.grid.clear(position)?;
    }
    debug!("[Bombs] Bomb {} at {} defused", bomb.id, position);
    game_state.events.push(GameEvent::BombDefused { bomb });
    Ok(Some(bomb))
}
