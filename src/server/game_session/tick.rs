/// Drives the tick loop of a GameSession.
/// Encapsulates timer management, input collection, and state updates.

use std::time::Duration;
use actix::prelude::*;
use log::{error, info};

use crate::config::game::TICK_DURATION_MS;
use crate::server::game_session::messages::CloseSession;
use crate::server::game_session::server::{GameEnded, GameSession};

/// Start the tick timer and send the initial state to anyone already listening.
pub fn start_ticking(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    let handle = ctx.run_interval(Duration::from_millis(TICK_DURATION_MS), |act, ctx| {
        resolve_tick(act, ctx);
    });
    this.tick_timer = Some(handle);
    ctx.run_later(this.idle_timeout, close_if_abandoned);

    let tick = this.game_state.current_tick();
    this.broadcast(this.update(tick, Vec::new(), None));
}

/// Resolve one tick: hand the collected inputs to the engine, broadcast the
/// outcome, and stop the loop once there is a result.
pub fn resolve_tick(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    if this.finished {
        return;
    }

    let actions = std::mem::take(&mut this.pending_actions);
    let report = match this.game_state.tick(&actions) {
        Ok(report) => report,
        Err(e) => {
            error!("[GameSession] Game {} aborted at tick {}: {}", this.game_id, this.game_state.current_tick(), e);
            finish(this, ctx);
            return;
        }
    };

    let game_over = report.winners.is_some();
    if let Some(winners) = &report.winners {
        info!(
            "[GameSession] Game {} over at tick {}: winners={:?}",
            this.game_id,
            report.tick,
            winners.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }
    this.broadcast(this.update(report.tick, report.events, report.winners));

    if game_over {
        finish(this, ctx);
    }
}

/// Shut the session down once nobody is connected any more.
pub fn close_if_abandoned(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    if this.finished || !this.players.is_empty() || !this.spectators.is_empty() {
        return;
    }
    info!("[GameSession] Game {} has no clients left, closing", this.game_id);
    finish(this, ctx);
}

/// Stop ticking, close every client socket and tell the manager to forget the game.
fn finish(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    this.finished = true;
    if let Some(handle) = this.tick_timer.take() {
        ctx.cancel_future(handle);
    }
    // Queued after the last broadcast, so clients still receive the result.
    for addr in this.players.drain().map(|(_, a)| a).chain(this.spectators.drain().map(|(_, a)| a)) {
        addr.do_send(CloseSession);
    }
    this.manager.do_send(GameEnded { game_id: this.game_id });
    ctx.stop();
}
