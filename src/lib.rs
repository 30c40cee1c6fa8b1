// Library crate for the shape game relay server
// This file exposes the public API for integration tests

pub mod config;
pub mod game;
pub mod relay;
pub mod shared;
pub mod websockets;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use game::{GameModel, GameService, InMemoryGameRepository};
pub use relay::GameEventRouter;
pub use shared::{AppError, AppState};
pub use websockets::{ConnectionManager, MessageHandler, MessageType, WebSocketMessage};

/// Builds the HTTP router: the game socket plus a liveness probe
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/ws", get(websockets::websocket_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
