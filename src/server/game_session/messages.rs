use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::entities::Player;
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::types::{Direction, PlayerId, Tick};

/// A command sent by a player over the WebSocket, e.g. `{"Move":"up"}` or `"DropBomb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientAction {
    Move(Direction),
    DropBomb,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub msg: ClientAction,
    pub player_id: PlayerId,
}

/// State broadcast to every client after each tick.
#[derive(Message, Clone, Serialize, Debug)]
#[rtype(result = "()")]
pub struct GameStateUpdate {
    pub tick: Tick,
    pub state: GameState,
    pub events: Vec<GameEvent>,
    pub winners: Option<Vec<Player>>,
}

/// Tells a client connection the game is over and its socket should close.
#[derive(Message)]
#[rtype(result = "()")]
pub struct CloseSession;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_action_wire_format() {
        let action: ClientAction = serde_json::from_str(r#"{"Move":"left"}"#).unwrap();
        assert_eq!(action, ClientAction::Move(Direction::Left));
        let action: ClientAction = serde_json::from_str(r#""DropBomb""#).unwrap();
        assert_eq!(action, ClientAction::DropBomb);
        assert!(serde_json::from_str::<ClientAction>(r#"{"Move":"north"}"#).is_err());
    }
}
