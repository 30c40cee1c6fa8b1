use std::sync::Arc;
use thiserror::Error;

use crate::game::GameService;
use crate::relay::GameEventRouter;
use crate::websockets::ConnectionManager;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
    pub connection_manager: Arc<dyn ConnectionManager>,
    pub event_router: Arc<GameEventRouter>,
}

impl AppState {
    pub fn new(
        game_service: Arc<GameService>,
        connection_manager: Arc<dyn ConnectionManager>,
    ) -> Self {
        let event_router = Arc::new(GameEventRouter::new(
            Arc::clone(&game_service),
            Arc::clone(&connection_manager),
        ));

        Self {
            game_service,
            connection_manager,
            event_router,
        }
    }
}

/// Errors raised by the game registry
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal,
}
