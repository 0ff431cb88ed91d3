use actix::{Actor, ActorContext, Addr, AsyncContext, Handler, StreamHandler};
use actix_web::{Error, HttpRequest, HttpResponse, error, http::StatusCode, web};
use actix_web_actors::ws;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::game::types::PlayerId;
use crate::server::game_session::messages::{
    ClientAction, CloseSession, GameStateUpdate, ProcessClientMessage,
};
use crate::server::game_session::server::{
    GameSession, GetGameSession, IsPlayer, RegisterSession, UnregisterSession,
};
use crate::server::state::AppState;
use crate::server::ws_error::{http_error_response, ws_error_message};

/// WebSocket connection of one client, player or spectator.
pub struct GameSessionActor {
    pub session_id: Uuid,
    pub game_id: Uuid,
    /// `None` for spectators.
    pub player: Option<PlayerId>,
    pub session_addr: Addr<GameSession>,
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.session_addr.do_send(RegisterSession {
            session_id: self.session_id,
            player: self.player,
            addr: ctx.address(),
        });
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        self.session_addr.do_send(UnregisterSession {
            session_id: self.session_id,
            player: self.player,
            addr: ctx.address(),
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let Some(player_id) = self.player else {
                    ctx.text(ws_error_message(
                        "SPECTATOR_COMMAND",
                        "Spectators cannot send commands",
                        Some(json!({ "game_id": self.game_id })),
                    ));
                    return;
                };
                let msg: ClientAction = match serde_json::from_str(&text) {
                    Ok(m) => m,
                    Err(e) => {
                        warn!("[GameSessionActor] Invalid command from player {}: {}", player_id, e);
                        ctx.text(ws_error_message(
                            "INVALID_COMMAND",
                            "Expected {\"Move\":\"up|down|left|right\"} or \"DropBomb\"",
                            Some(json!({ "player": player_id })),
                        ));
                        return;
                    }
                };
                self.session_addr.do_send(ProcessClientMessage { msg, player_id });
            }
            Ok(ws::Message::Ping(bytes)) => ctx.pong(&bytes),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[GameSessionActor] Protocol error on game {}: {}", self.game_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

// Forward each game state update to the client.
impl Handler<GameStateUpdate> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: GameStateUpdate, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(_) => ctx.text(ws_error_message(
                "SERIALIZATION_FAILED",
                "Failed to serialize game state",
                None,
            )),
        }
    }
}

impl Handler<CloseSession> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, _: CloseSession, ctx: &mut Self::Context) -> Self::Result {
        debug!("[GameSessionActor] Closing {} on game {}", self.session_id, self.game_id);
        ctx.close(Some(ws::CloseCode::Normal.into()));
        ctx.stop();
    }
}

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub player: Option<PlayerId>,
}

/// Open a WebSocket on a game. `?player=<id>` joins as that player, no query
/// joins as a spectator.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<Uuid>,
    query: web::Query<WsQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let game_id = path.into_inner();

    let session_addr = match data
        .game_session_manager
        .send(GetGameSession { game_id })
        .await
        .map_err(error::ErrorInternalServerError)?
    {
        Ok(addr) => addr,
        Err(message) => {
            return Ok(http_error_response(
                "GAME_NOT_FOUND",
                &message,
                Some(json!({ "game_id": game_id })),
                StatusCode::NOT_FOUND,
            ));
        }
    };

    let player = query.into_inner().player;
    if let Some(player_id) = player {
        let known = session_addr
            .send(IsPlayer(player_id))
            .await
            .map_err(error::ErrorInternalServerError)?;
        if !known {
            return Ok(http_error_response(
                "UNKNOWN_PLAYER",
                "No such player in this game",
                Some(json!({ "game_id": game_id, "player": player_id })),
                StatusCode::BAD_REQUEST,
            ));
        }
    }

    let session_id = Uuid::new_v4();
    debug!("[GameSessionActor] New connection {} on game {} as {:?}", session_id, game_id, player);
    ws::start(
        GameSessionActor {
            session_id,
            game_id,
            player,
            session_addr,
        },
        &req,
        stream,
    )
}

#[cfg(test)]
mod tests {
    use actix::Actor;
    use actix_web::{App, web};
    use awc::error::WsProtocolError;
    use awc::ws::{Frame, Message};
    use futures_util::{SinkExt, Stream, StreamExt};
    use serde_json::{Value, json};

    use crate::server::game_session::server::GameSessionManager;
    use crate::server::router;
    use crate::server::state::AppState;

    fn server() -> actix_test::TestServer {
        let state = web::Data::new(AppState::new(GameSessionManager::new().start()));
        actix_test::start(move || App::new().app_data(state.clone()).configure(router::config))
    }

    async fn create_game(srv: &actix_test::TestServer, config: Value) -> String {
        let mut resp = srv.post("/games").send_json(&config).await.unwrap();
        let body: Value = resp.json().await.unwrap();
        body["game_id"].as_str().unwrap().to_owned()
    }

    /// Next JSON text frame, or `None` once the server closes the socket.
    async fn next_message<S>(ws: &mut S) -> Option<Value>
    where
        S: Stream<Item = Result<Frame, WsProtocolError>> + Unpin,
    {
        while let Some(frame) = ws.next().await {
            match frame.unwrap() {
                Frame::Text(bytes) => return Some(serde_json::from_slice(&bytes).unwrap()),
                Frame::Close(_) => return None,
                _ => {}
            }
        }
        None
    }

    #[actix_web::test]
    async fn test_spectator_commands_are_rejected() {
        let mut srv = server();
        let game_id = create_game(&srv, json!({ "grid_size": 6, "player_count": 2 })).await;
        let mut ws = srv.ws_at(&format!("/ws/game/{game_id}")).await.unwrap();

        ws.send(Message::Text("\"DropBomb\"".into())).await.unwrap();
        loop {
            let msg = next_message(&mut ws).await.expect("socket closed early");
            if msg["action"] == "Error" {
                assert_eq!(msg["data"]["code"], "SPECTATOR_COMMAND");
                break;
            }
            assert!(msg["state"].is_object());
        }
    }

    #[actix_web::test]
    async fn test_bad_command_gets_error_frame() {
        let mut srv = server();
        let game_id = create_game(&srv, json!({ "grid_size": 6, "player_count": 2 })).await;
        let mut ws = srv.ws_at(&format!("/ws/game/{game_id}?player=1")).await.unwrap();

        ws.send(Message::Text(r#"{"Move":"north"}"#.into())).await.unwrap();
        loop {
            let msg = next_message(&mut ws).await.expect("socket closed early");
            if msg["action"] == "Error" {
                assert_eq!(msg["data"]["code"], "INVALID_COMMAND");
                assert_eq!(msg["data"]["context"]["player"], 1);
                break;
            }
        }
    }

    #[actix_web::test]
    async fn test_player_receives_result_then_socket_closes() {
        let mut srv = server();
        let game_id = create_game(
            &srv,
            json!({ "grid_size": 5, "player_count": 2, "fuse_ticks": 1 }),
        )
        .await;
        let mut ws = srv.ws_at(&format!("/ws/game/{game_id}?player=0")).await.unwrap();

        // Player 1 spawns at (1, 3), right below where player 0's bomb lands.
        ws.send(Message::Text("\"DropBomb\"".into())).await.unwrap();

        let mut winners = Value::Null;
        while let Some(msg) = next_message(&mut ws).await {
            if !msg["winners"].is_null() {
                winners = msg["winners"].clone();
            }
        }
        assert_eq!(winners.as_array().map(Vec::len), Some(1));
        assert_eq!(winners[0]["id"], 0);
    }
}
