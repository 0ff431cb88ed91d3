// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components that drive the engine:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (game lifecycle, tick loop, client input)
//! - JSON error helpers

pub mod game_session;
pub mod router;
pub mod state;
pub mod ws_error;
