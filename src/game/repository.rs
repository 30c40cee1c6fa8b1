use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

use super::models::GameModel;
use super::types::{CollectShapeResult, JoinGameResult, LeaveGameResult};
use crate::shared::AppError;

/// Trait for game repository operations
#[async_trait]
pub trait GameRepository {
    /// Stores a new game. Fails with `AppError::Conflict` if the id is already live.
    async fn create_game(&self, game: &GameModel) -> Result<(), AppError>;
    async fn get_game(&self, game_id: &str) -> Result<Option<GameModel>, AppError>;
    async fn game_count(&self) -> Result<usize, AppError>;

    /// Atomically checks capacity and adds the player
    async fn try_join_game(
        &self,
        game_id: &str,
        connection_id: &str,
    ) -> Result<JoinGameResult, AppError>;

    /// Atomically awards points and removes the shape slot at `shape_index`
    async fn collect_shape(
        &self,
        game_id: &str,
        connection_id: &str,
        shape_index: usize,
    ) -> Result<CollectShapeResult, AppError>;

    /// Removes the connection from every game it belongs to, deleting games that become empty
    async fn remove_connection(&self, connection_id: &str)
        -> Result<Vec<LeaveGameResult>, AppError>;
}

#[derive(Default)]
struct GameRegistry {
    games: HashMap<String, GameModel>,
    // connection id -> ids of the games it plays in
    memberships: HashMap<String, HashSet<String>>,
}

impl GameRegistry {
    fn track(&mut self, connection_id: &str, game_id: &str) {
        self.memberships
            .entry(connection_id.to_string())
            .or_default()
            .insert(game_id.to_string());
    }
}

/// In-memory implementation of GameRepository
pub struct InMemoryGameRepository {
    registry: Mutex<GameRegistry>,
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(GameRegistry::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameRegistry>, AppError> {
        self.registry.lock().map_err(|_| {
            warn!("Game registry lock poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, game))]
    async fn create_game(&self, game: &GameModel) -> Result<(), AppError> {
        debug!(game_id = %game.id, "Creating game in memory");

        let mut registry = self.lock()?;
        if registry.games.contains_key(&game.id) {
            warn!(game_id = %game.id, "Game already exists in memory");
            return Err(AppError::Conflict(format!("Game {} already exists", game.id)));
        }

        for player in &game.players {
            registry.track(player, &game.id);
        }
        registry.games.insert(game.id.clone(), game.clone());

        debug!(game_id = %game.id, "Game created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: &str) -> Result<Option<GameModel>, AppError> {
        let registry = self.lock()?;
        let game = registry.games.get(game_id).cloned();

        if game.is_none() {
            debug!(game_id = %game_id, "Game not found in memory");
        }

        Ok(game)
    }

    async fn game_count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.games.len())
    }

    #[instrument(skip(self))]
    async fn try_join_game(
        &self,
        game_id: &str,
        connection_id: &str,
    ) -> Result<JoinGameResult, AppError> {
        debug!(game_id = %game_id, connection_id = %connection_id, "Attempting to join game atomically");

        let mut registry = self.lock()?;

        let game = match registry.games.get_mut(game_id) {
            Some(game) => game,
            None => {
                debug!(game_id = %game_id, "Game not found");
                return Ok(JoinGameResult::GameNotFound);
            }
        };

        if game.has_player(connection_id) {
            debug!(game_id = %game_id, connection_id = %connection_id, "Player already in game");
            return Ok(JoinGameResult::Success(game.clone()));
        }

        if game.is_full() {
            debug!(game_id = %game_id, player_count = game.players.len(), "Game is full");
            return Ok(JoinGameResult::GameFull);
        }

        game.add_player(connection_id);
        let updated_game = game.clone();
        registry.track(connection_id, game_id);

        info!(
            game_id = %game_id,
            connection_id = %connection_id,
            player_count = updated_game.players.len(),
            "Player joined game"
        );

        Ok(JoinGameResult::Success(updated_game))
    }

    #[instrument(skip(self))]
    async fn collect_shape(
        &self,
        game_id: &str,
        connection_id: &str,
        shape_index: usize,
    ) -> Result<CollectShapeResult, AppError> {
        let mut registry = self.lock()?;

        let game = match registry.games.get_mut(game_id) {
            Some(game) => game,
            None => return Ok(CollectShapeResult::GameNotFound),
        };

        if !game.has_player(connection_id) {
            return Ok(CollectShapeResult::NotAPlayer);
        }

        let removed = game.collect_shape(connection_id, shape_index);
        if removed.is_none() {
            debug!(
                game_id = %game_id,
                shape_index = shape_index,
                remaining_shapes = game.shapes.len(),
                "Shape index out of range, nothing removed"
            );
        }

        Ok(CollectShapeResult::Success {
            game: game.clone(),
            removed,
        })
    }

    #[instrument(skip(self))]
    async fn remove_connection(
        &self,
        connection_id: &str,
    ) -> Result<Vec<LeaveGameResult>, AppError> {
        let mut registry = self.lock()?;

        let game_ids = match registry.memberships.remove(connection_id) {
            Some(ids) => ids,
            None => {
                debug!(connection_id = %connection_id, "Connection not in any game");
                return Ok(Vec::new());
            }
        };

        let mut results = Vec::with_capacity(game_ids.len());
        for game_id in game_ids {
            let Some(game) = registry.games.get_mut(&game_id) else {
                continue;
            };

            if !game.remove_player(connection_id) {
                continue;
            }

            if game.is_empty() {
                registry.games.remove(&game_id);
                info!(game_id = %game_id, "Game is now empty, deleted");
                results.push(LeaveGameResult::GameDeleted(game_id));
            } else {
                info!(
                    game_id = %game_id,
                    connection_id = %connection_id,
                    remaining_players = game.players.len(),
                    "Player left game"
                );
                results.push(LeaveGameResult::Left(game.clone()));
            }
        }

        Ok(results)
    }
}
