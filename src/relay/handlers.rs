use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::broadcast::MessageBroadcaster;
use crate::{
    game::{CollectShapeResult, GameService, JoinGameResult, LeaveGameResult},
    shared::AppError,
    websockets::{
        messages::{CollectShapePayload, PlayerMovePayload},
        ConnectionManager, WebSocketMessage,
    },
};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Registry error: {0}")]
    Registry(#[from] AppError),
}

/// Registry mutations and the broadcasts they produce, one method per inbound event
pub struct GameEventHandlers {
    game_service: Arc<GameService>,
    connection_manager: Arc<dyn ConnectionManager>,
}

impl GameEventHandlers {
    pub fn new(
        game_service: Arc<GameService>,
        connection_manager: Arc<dyn ConnectionManager>,
    ) -> Self {
        Self {
            game_service,
            connection_manager,
        }
    }

    pub async fn handle_create_game(&self, connection_id: &str) -> Result<(), RelayError> {
        let game = self.game_service.create_game(connection_id).await?;

        MessageBroadcaster::send_to_player(
            &self.connection_manager,
            connection_id,
            &WebSocketMessage::game_created(&game.id),
        )
        .await
    }

    pub async fn handle_join_game(
        &self,
        connection_id: &str,
        game_id: &str,
    ) -> Result<(), RelayError> {
        match self.game_service.join_game(game_id, connection_id).await? {
            JoinGameResult::Success(game) => {
                MessageBroadcaster::broadcast_to_players(
                    &self.connection_manager,
                    &game.players,
                    &WebSocketMessage::player_joined(&game.players, &game.scores),
                )
                .await
            }
            refused => {
                info!(
                    game_id = %game_id,
                    connection_id = %connection_id,
                    reason = ?refused,
                    "Join refused"
                );
                MessageBroadcaster::send_to_player(
                    &self.connection_manager,
                    connection_id,
                    &WebSocketMessage::join_error(JoinGameResult::ERROR_MESSAGE),
                )
                .await
            }
        }
    }

    /// Relays a position to every player of the game except the sender. Positions are forwarded as sent.
    pub async fn handle_player_move(
        &self,
        connection_id: &str,
        payload: PlayerMovePayload,
    ) -> Result<(), RelayError> {
        let Some(game) = self.game_service.get_game(&payload.game_id).await? else {
            warn!(game_id = %payload.game_id, connection_id = %connection_id, "Move for unknown game dropped");
            return Ok(());
        };

        // Membership is not checked: the relay trusts the sender
        debug!(
            game_id = %game.id,
            connection_id = %connection_id,
            is_player = game.has_player(connection_id),
            "Relaying move"
        );

        MessageBroadcaster::broadcast_to_players(
            &self.connection_manager,
            &game.other_players(connection_id),
            &WebSocketMessage::opponent_move(connection_id, payload.position),
        )
        .await
    }

    pub async fn handle_collect_shape(
        &self,
        connection_id: &str,
        payload: CollectShapePayload,
    ) -> Result<(), RelayError> {
        match self
            .game_service
            .collect_shape(&payload.game_id, connection_id, payload.shape_index)
            .await?
        {
            CollectShapeResult::Success { game, .. } => {
                info!(
                    game_id = %game.id,
                    connection_id = %connection_id,
                    shape_index = payload.shape_index,
                    "Shape collected"
                );
                MessageBroadcaster::broadcast_to_players(
                    &self.connection_manager,
                    &game.players,
                    &WebSocketMessage::shape_collected(
                        connection_id,
                        payload.shape_index,
                        &game.scores,
                    ),
                )
                .await
            }
            CollectShapeResult::NotAPlayer => {
                warn!(game_id = %payload.game_id, connection_id = %connection_id, "Collect from non-player dropped");
                Ok(())
            }
            CollectShapeResult::GameNotFound => {
                warn!(game_id = %payload.game_id, connection_id = %connection_id, "Collect for unknown game dropped");
                Ok(())
            }
        }
    }

    pub async fn handle_disconnect(&self, connection_id: &str) -> Result<(), RelayError> {
        for result in self.game_service.remove_connection(connection_id).await? {
            match result {
                LeaveGameResult::Left(game) => {
                    MessageBroadcaster::broadcast_to_players(
                        &self.connection_manager,
                        &game.players,
                        &WebSocketMessage::player_left(connection_id, &game.players, &game.scores),
                    )
                    .await?;
                }
                LeaveGameResult::GameDeleted(game_id) => {
                    debug!(game_id = %game_id, connection_id = %connection_id, "Last player left");
                }
            }
        }

        Ok(())
    }
}
