use std::sync::Arc;

use super::handlers::RelayError;
use crate::websockets::{ConnectionManager, WebSocketMessage};

pub struct MessageBroadcaster;

impl MessageBroadcaster {
    pub async fn send_to_player(
        connection_manager: &Arc<dyn ConnectionManager>,
        connection_id: &str,
        message: &WebSocketMessage,
    ) -> Result<(), RelayError> {
        let message_json = serde_json::to_string(message)?;
        connection_manager
            .send_to_player(connection_id, &message_json)
            .await;
        Ok(())
    }

    pub async fn broadcast_to_players(
        connection_manager: &Arc<dyn ConnectionManager>,
        connection_ids: &[String],
        message: &WebSocketMessage,
    ) -> Result<(), RelayError> {
        if connection_ids.is_empty() {
            return Ok(());
        }

        let message_json = serde_json::to_string(message)?;
        connection_manager
            .send_to_players(connection_ids, &message_json)
            .await;
        Ok(())
    }
}
