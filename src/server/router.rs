//! HTTP and WebSocket routing configuration.
//!
//! Games are created over plain HTTP; play and spectating happen over a
//! WebSocket handled by a dedicated actor per connection.

use actix_web::{HttpResponse, http::StatusCode, web};
use log::{error, info};

use crate::config::GameConfig;
use crate::server::game_session::server::CreateGame;
use crate::server::game_session::session::ws_game;
use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/games").route(web::post().to(create_game)))
        .service(web::resource("/ws/game/{game_id}").to(ws_game));
}

/// Create a game from the JSON config in the body and answer with its id and
/// the player ids clients should connect with.
pub async fn create_game(
    config: web::Json<GameConfig>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let config = config.into_inner();
    match data.game_session_manager.send(CreateGame { config }).await {
        Ok(Ok(created)) => {
            info!("[Router] Created game {} with {} players", created.game_id, created.player_ids.len());
            HttpResponse::Created().json(created)
        }
        Ok(Err(e)) => http_error_response(e.code(), &e.to_string(), None, StatusCode::BAD_REQUEST),
        Err(e) => {
            error!("[Router] Game session manager unavailable: {}", e);
            http_error_response(
                "INTERNAL_ERROR",
                "Game session manager unavailable",
                None,
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix::Actor;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::server::game_session::server::GameSessionManager;

    #[actix_web::test]
    async fn test_create_game() {
        let state = web::Data::new(AppState::new(GameSessionManager::new().start()));
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/games")
            .set_json(json!({ "grid_size": 6, "player_count": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["player_ids"], json!([0, 1, 2]));
        assert!(body["game_id"].as_str().is_some());
    }

    #[actix_web::test]
    async fn test_create_game_rejects_bad_config() {
        let state = web::Data::new(AppState::new(GameSessionManager::new().start()));
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/games")
            .set_json(json!({ "player_count": 7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_PLAYER_COUNT");
    }

    #[actix_web::test]
    async fn test_ws_unknown_game_is_not_found() {
        let state = web::Data::new(AppState::new(GameSessionManager::new().start()));
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/ws/game/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "GAME_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_ws_unknown_player_is_rejected() {
        let state = web::Data::new(AppState::new(GameSessionManager::new().start()));
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/games")
            .set_json(json!({ "player_count": 2 }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let game_id = created["game_id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/ws/game/{game_id}?player=3"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_PLAYER");
        assert_eq!(body["error"]["context"]["player"], 3);
    }
}
