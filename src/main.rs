use shape_relay::{app, AppState, GameService, InMemoryGameRepository, ServerConfig};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shape_relay::websockets::InMemoryConnectionManager;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shape_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shape relay server");

    let config = ServerConfig::from_env();

    let game_service = Arc::new(GameService::new(Arc::new(InMemoryGameRepository::new())));
    let connection_manager = Arc::new(InMemoryConnectionManager::new());
    let app_state = AppState::new(game_service, connection_manager);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %addr, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    info!("Server running on port {}", config.port);

    if let Err(e) = axum::serve(listener, app(app_state)).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
