//! Elimination rules.
//!
//! Every player death goes through [`eliminate`]. Trapped players are pruned
//! once per tick and the winners are derived from who is left.

use std::collections::HashSet;

use log::info;

use crate::game::entities::Player;
use crate::game::error::GameError;
use crate::game::events::{EliminationCause, GameEvent};
use crate::game::state::GameState;
use crate::game::types::{Entity, PlayerId, Point};

/// Kill a live player and leave a wall facing its last direction on its tile.
pub fn eliminate(game_state: &mut GameState, player_id: PlayerId) -> Result<(), GameError> {
    eliminate_with_cause(game_state, player_id, EliminationCause::Direct)
}

pub(crate) fn eliminate_with_cause(
    game_state: &mut GameState,
    player_id: PlayerId,
    cause: EliminationCause,
) -> Result<(), GameError> {
    let player = game_state.alive_player(player_id)?;
    let position = player.position;
    let facing = player.facing;

    game_state.player_mut(player_id)?.is_alive = false;
    game_state.grid.clear(position)?;
    game_state.grid.fill(position, Entity::Wall { facing })?;

    info!("[Rules] Player {} eliminated at {} ({:?})", player_id, position, cause);
    game_state.events.push(GameEvent::PlayerEliminated {
        player: player_id,
        position,
        cause,
    });
    Ok(())
}

/// Eliminate every live player that cannot reach any other live player.
///
/// Reachability is evaluated against the grid as it stands before the first
/// elimination of the pass. When no two live players are connected at all, a
/// player alone in the strictly largest wall-free area survives; if that area
/// size is shared, every live player is eliminated. Returns the ids eliminated.
pub fn prune_isolated(game_state: &mut GameState) -> Result<Vec<PlayerId>, GameError> {
    let live: Vec<(PlayerId, Point)> = game_state
        .alive_players()
        .map(|p| (p.id, p.position))
        .collect();
    if live.len() <= 1 {
        return Ok(Vec::new());
    }

    let mut reachable: HashSet<PlayerId> = HashSet::with_capacity(live.len());
    for (i, &(a, pos_a)) in live.iter().enumerate() {
        for &(b, pos_b) in &live[i + 1..] {
            if reachable.contains(&a) && reachable.contains(&b) {
                continue;
            }
            if game_state.grid.reachable(pos_a, pos_b)? {
                reachable.insert(a);
                reachable.insert(b);
            }
        }
    }

    let trapped: Vec<PlayerId> = if reachable.is_empty() {
        let regions = live
            .iter()
            .map(|&(id, pos)| Ok((id, game_state.grid.region_size(pos)?)))
            .collect::<Result<Vec<_>, GameError>>()?;
        let largest = regions.iter().map(|&(_, size)| size).max().unwrap_or(0);
        let holders = regions.iter().filter(|&&(_, size)| size == largest).count();
        // A single player owning the roomiest area outlives the others.
        // Any tie for it leaves nobody connected, so everyone goes.
        regions
            .into_iter()
            .filter(|&(_, size)| holders > 1 || size < largest)
            .map(|(id, _)| id)
            .collect()
    } else {
    for &id in &trapped {
        eliminate_with_cause(game_state, id, EliminationCause::Trapped)?;
    }
    Ok(trapped)
}

/// The live players once at most one remains, `None` while the game continues.
pub fn winners(game_state: &GameState) -> Option<Vec<Player>> {
    let live: Vec<Player> = game_state.alive_players().cloned().collect();
    if live.len() <= 1 {
        Some(live)
    } else {
        None
    }
}
