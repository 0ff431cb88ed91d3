// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the game session manager actor and is shared between
//! the HTTP/WebSocket handlers.

use actix::Addr;

use crate::server::game_session::server::GameSessionManager;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game session manager actor (creates and tracks games).
    pub game_session_manager: Addr<GameSessionManager>,
}

impl AppState {
    pub fn new(game_session_manager: Addr<GameSessionManager>) -> Self {
        AppState { game_session_manager }
    }
}
