use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::config::game::IDLE_SESSION_TIMEOUT_MS;
use crate::game::actions::TickActions;
use crate::game::error::GameError;
use crate::game::events::GameEvent;
use crate::game::entities::Player;
use crate::game::state::GameState;
use crate::game::types::{PlayerId, Tick};
use crate::server::game_session::messages::{ClientAction, GameStateUpdate, ProcessClientMessage};
use crate::server::game_session::session::GameSessionActor;
use crate::server::game_session::tick::{close_if_abandoned, start_ticking};

/// One running game: owns the engine state and the connected clients.
pub struct GameSession {
    pub game_id: Uuid,
    pub game_state: GameState,
    pub players: HashMap<PlayerId, Addr<GameSessionActor>>,
    pub spectators: HashMap<Uuid, Addr<GameSessionActor>>,

    pub(crate) manager: Addr<GameSessionManager>,
    pub(crate) pending_actions: TickActions,
    pub(crate) tick_timer: Option<SpawnHandle>,
    pub(crate) idle_timeout: Duration,
    pub(crate) finished: bool,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        start_ticking(self, ctx);
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        debug!("[GameSession] Session {} stopped", self.game_id);
    }
}

impl GameSession {
    pub fn new(game_id: Uuid, game_state: GameState, manager: Addr<GameSessionManager>) -> Self {
        Self {
            game_id,
            game_state,
            players: HashMap::new(),
            spectators: HashMap::new(),
            manager,
            pending_actions: TickActions::new(),
            tick_timer: None,
            idle_timeout: Duration::from_millis(IDLE_SESSION_TIMEOUT_MS),
            finished: false,
        }
    }

    /// Merge a client command into the inputs of the coming tick.
    /// Commands from unknown or eliminated players are dropped.
    pub fn queue_action(&mut self, player_id: PlayerId, action: ClientAction) {
        if self.finished {
            warn!("[GameSession] Action received after game {} ended", self.game_id);
            return;
        }
        if let Err(e) = self.game_state.alive_player(player_id) {
            warn!("[GameSession] Ignoring action from player {}: {}", player_id, e);
            return;
        }

        let input = self.pending_actions.input_mut(player_id);
        match action {
            ClientAction::Move(direction) => input.press(direction),
            ClientAction::DropBomb => input.bomb = true,
        }
    }

    pub fn update(&self, tick: Tick, events: Vec<GameEvent>, winners: Option<Vec<Player>>) -> GameStateUpdate {
        GameStateUpdate {
            tick,
            state: self.game_state.clone(),
            events,
            winners,
        }
    }

    /// Send `update` to every connected player and spectator.
    pub fn broadcast(&self, update: GameStateUpdate) {
        debug!(
            "[GameSession] Broadcast GameState: game_id={} tick={} clients={}",
            self.game_id,
            update.tick,
            self.players.len() + self.spectators.len()
        );
        for addr in self.players.values().chain(self.spectators.values()) {
            addr.do_send(update.clone());
        }
    }
}

pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
}

impl Default for GameSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_game(
        &mut self,
        config: GameConfig,
        manager: Addr<GameSessionManager>,
    ) -> Result<CreatedGame, GameError> {
        let game_state = GameState::new(&config)?;
        let game_id = Uuid::new_v4();
        let player_ids = game_state.players().iter().map(|p| p.id).collect();

        let session = GameSession::new(game_id, game_state, manager).start();

        self.sessions.insert(game_id, session);
        Ok(CreatedGame { game_id, player_ids })
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedGame {
    pub game_id: Uuid,
    pub player_ids: Vec<PlayerId>,
}

#[derive(Message)]
#[rtype(result = "Result<CreatedGame, GameError>")]
pub struct CreateGame {
    pub config: GameConfig,
}

impl Handler<CreateGame> for GameSessionManager {
    type Result = MessageResult<CreateGame>;

    fn handle(&mut self, msg: CreateGame, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_game(msg.config, ctx.address()))
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<GameSession>, String>")]
pub struct GetGameSession {
    pub game_id: Uuid,
}

impl Handler<GetGameSession> for GameSessionManager {
    type Result = Result<Addr<GameSession>, String>;

    fn handle(&mut self, msg: GetGameSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions
            .get(&msg.game_id)
            .cloned()
            .ok_or_else(|| "Game session not found".to_string())
    }
}

/// Sent by a session once its game has a result.
#[derive(Message)]
#[rtype(result = "()")]
pub struct GameEnded {
    pub game_id: Uuid,
}

impl Handler<GameEnded> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: GameEnded, _: &mut Context<Self>) -> Self::Result {
        if self.sessions.remove(&msg.game_id).is_some() {
            info!("[GameSessionManager] Game {} removed", msg.game_id);
        }
    }
}

#[derive(Message)]
#[rtype(result = "bool")]
pub struct IsPlayer(pub PlayerId);

impl Handler<IsPlayer> for GameSession {
    type Result = bool;

    fn handle(&mut self, msg: IsPlayer, _: &mut Context<Self>) -> Self::Result {
        self.game_state.player(msg.0).is_ok()
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, _: &mut Context<Self>) -> Self::Result {
        self.queue_action(msg.player_id, msg.msg);
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterSession {
    pub session_id: Uuid,
    pub player: Option<PlayerId>,
    pub addr: Addr<GameSessionActor>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterSession {
    pub session_id: Uuid,
    pub player: Option<PlayerId>,
    pub addr: Addr<GameSessionActor>,
}

impl Handler<RegisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterSession, _: &mut Context<Self>) -> Self::Result {
        match msg.player {
            Some(player_id) => {
                if self.players.insert(player_id, msg.addr.clone()).is_some() {
                    warn!("[GameSession] Player {} reconnected, replacing previous session", player_id);
                }
            }
            None => {
                self.spectators.insert(msg.session_id, msg.addr.clone());
            }
        }
        let tick = self.game_state.current_tick();
        msg.addr.do_send(self.update(tick, Vec::new(), None));
    }
}

impl Handler<UnregisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: UnregisterSession, ctx: &mut Context<Self>) -> Self::Result {
        match msg.player {
            // A reconnect may already have replaced this address.
            Some(player_id) if self.players.get(&player_id) == Some(&msg.addr) => {
                self.players.remove(&player_id);
            }
            Some(_) => {}
            None => {
                self.spectators.remove(&msg.session_id);
            }
        }
        close_if_abandoned(self, ctx);
    }
}
