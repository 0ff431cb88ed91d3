//! Main entry point for the backend server.
//!
//! Initializes the actor system, configures application state, and launches the HTTP server
//! with the game creation and WebSocket endpoints.

use actix::Actor;
use actix_web::{App, HttpServer, web};
use log::info;

use bomb_arena::config::server::{BIND_HOST, BIND_PORT};
use bomb_arena::server::game_session::server::GameSessionManager;
use bomb_arena::server::{router, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    // Start the GameSessionManager actor (creates games and tracks their sessions).
    let game_session_manager = GameSessionManager::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(AppState::new(game_session_manager));

    info!("Listening on {}:{}", BIND_HOST, BIND_PORT);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .app_data(state.clone())
            .configure(router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
