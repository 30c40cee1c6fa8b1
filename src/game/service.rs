use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    generators::{GameIdGenerator, RandomGameIdGenerator},
    models::GameModel,
    repository::GameRepository,
    types::{CollectShapeResult, JoinGameResult, LeaveGameResult},
};
use crate::shared::AppError;

/// Attempts at finding an unused id before giving up
const MAX_ID_ATTEMPTS: usize = 16;

/// Sole authority over game existence and membership
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
    id_generator: Arc<dyn GameIdGenerator>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        Self::with_id_generator(repository, Arc::new(RandomGameIdGenerator::new()))
    }

    pub fn with_id_generator(
        repository: Arc<dyn GameRepository + Send + Sync>,
        id_generator: Arc<dyn GameIdGenerator>,
    ) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Creates a new game with `creator` as its only player
    #[instrument(skip(self))]
    pub async fn create_game(&self, creator: &str) -> Result<GameModel, AppError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let game = GameModel::new(self.id_generator.generate().await, creator.to_string());

            match self.repository.create_game(&game).await {
                Ok(()) => {
                    info!(game_id = %game.id, creator = %creator, "Game created");
                    return Ok(game);
                }
                Err(AppError::Conflict(_)) => {
                    debug!(game_id = %game.id, attempt, "Game id already live, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(creator = %creator, "Could not find a free game id");
        Err(AppError::Internal)
    }

    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<Option<GameModel>, AppError> {
        self.repository.get_game(game_id).await
    }

    #[instrument(skip(self))]
    pub async fn join_game(
        &self,
        game_id: &str,
        connection_id: &str,
    ) -> Result<JoinGameResult, AppError> {
        self.repository.try_join_game(game_id, connection_id).await
    }

    #[instrument(skip(self))]
    pub async fn collect_shape(
        &self,
        game_id: &str,
        connection_id: &str,
        shape_index: usize,
    ) -> Result<CollectShapeResult, AppError> {
        self.repository
            .collect_shape(game_id, connection_id, shape_index)
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_connection(
        &self,
        connection_id: &str,
    ) -> Result<Vec<LeaveGameResult>, AppError> {
        self.repository.remove_connection(connection_id).await
    }

    pub async fn game_count(&self) -> Result<usize, AppError> {
        self.repository.game_count().await
    }
}
