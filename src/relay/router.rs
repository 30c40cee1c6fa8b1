use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use super::handlers::{GameEventHandlers, RelayError};
use crate::{
    game::GameService,
    websockets::{
        messages::{CollectShapePayload, JoinGamePayload, PlayerMovePayload},
        ConnectionManager, MessageHandler, MessageType, WebSocketMessage,
    },
};

/// Turns inbound socket frames into game events.
///
/// Events from all connections go through one dispatch lock, so each event (its registry
/// change and the messages it fans out) completes before the next one starts.
pub struct GameEventRouter {
    handlers: GameEventHandlers,
    dispatch_lock: Mutex<()>,
}

impl GameEventRouter {
    pub fn new(
        game_service: Arc<GameService>,
        connection_manager: Arc<dyn ConnectionManager>,
    ) -> Self {
        Self {
            handlers: GameEventHandlers::new(game_service, connection_manager),
            dispatch_lock: Mutex::new(()),
        }
    }

    async fn dispatch(
        &self,
        connection_id: &str,
        message: WebSocketMessage,
    ) -> Result<(), RelayError> {
        let event = message.message_type;

        match event {
            MessageType::CreateGame => self.handlers.handle_create_game(connection_id).await,
            MessageType::JoinGame => {
                let Some(payload) =
                    parse_payload::<JoinGamePayload>(connection_id, event, message.payload)
                else {
                    return Ok(());
                };
                self.handlers
                    .handle_join_game(connection_id, payload.game_id())
                    .await
            }
            MessageType::PlayerMove => {
                let Some(payload) =
                    parse_payload::<PlayerMovePayload>(connection_id, event, message.payload)
                else {
                    return Ok(());
                };
                self.handlers.handle_player_move(connection_id, payload).await
            }
            MessageType::CollectShape => {
                let Some(payload) =
                    parse_payload::<CollectShapePayload>(connection_id, event, message.payload)
                else {
                    return Ok(());
                };
                self.handlers
                    .handle_collect_shape(connection_id, payload)
                    .await
            }
            _ => {
                debug!(
                    connection_id = %connection_id,
                    message_type = %event,
                    "Ignoring server-to-client message type"
                );
                Ok(())
            }
        }
    }
}

fn parse_payload<T: DeserializeOwned>(
    connection_id: &str,
    event: MessageType,
    payload: serde_json::Value,
) -> Option<T> {
    match serde_json::from_value(payload) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(
                connection_id = %connection_id,
                message_type = %event,
                error = %e,
                "Malformed payload dropped"
            );
            None
        }
    }
}

#[async_trait]
impl MessageHandler for GameEventRouter {
    async fn handle_message(&self, connection_id: &str, message: String) {
        debug!(
            connection_id = %connection_id,
            message = %message,
            "Received message"
        );

        let ws_message = match serde_json::from_str::<WebSocketMessage>(&message) {
            Ok(ws_message) => ws_message,
            Err(e) => {
                warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Failed to parse WebSocket message"
                );
                return;
            }
        };

        let message_type = ws_message.message_type;
        let _guard = self.dispatch_lock.lock().await;
        if let Err(e) = self.dispatch(connection_id, ws_message).await {
            error!(
                connection_id = %connection_id,
                message_type = %message_type,
                error = %e,
                "Failed to handle event"
            );
        }
    }

    async fn handle_disconnect(&self, connection_id: &str) {
        let _guard = self.dispatch_lock.lock().await;
        if let Err(e) = self.handlers.handle_disconnect(connection_id).await {
            error!(
                connection_id = %connection_id,
                error = %e,
                "Failed to clean up after disconnect"
            );
        }
    }
}
