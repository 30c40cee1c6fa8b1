use serde_json::{json, Value};

use shape_relay::websockets::{MessageHandler, MessageType, WebSocketMessage};

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a WebSocket message as if it came from `connection_id`
    pub async fn send_message(&self, connection_id: &str, message: WebSocketMessage) {
        let message_json = serde_json::to_string(&message).unwrap();
        self.router.handle_message(connection_id, message_json).await;
    }

    /// Send a raw text frame
    pub async fn send_raw(&self, connection_id: &str, frame: &str) {
        self.router
            .handle_message(connection_id, frame.to_string())
            .await;
    }

    /// Clear all recorded messages
    pub async fn clear_messages(&self) {
        self.mock_conn_manager.clear_messages().await;
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    /// Create a game and return its id (consumes the gameCreated reply)
    pub async fn create_game(&self, creator: &str) -> String {
        self.send_message(
            creator,
            WebSocketMessage::new(MessageType::CreateGame, Value::Null),
        )
        .await;

        let reply = self
            .mock_conn_manager
            .consume_message_for(creator)
            .await
            .expect("creator should receive gameCreated");
        let reply: WebSocketMessage = serde_json::from_str(&reply).unwrap();
        assert_eq!(reply.message_type, MessageType::GameCreated);
        reply.payload["gameId"].as_str().unwrap().to_string()
    }

    pub async fn send_join(&self, player: &str, game_id: &str) {
        self.send_message(
            player,
            WebSocketMessage::new(MessageType::JoinGame, json!(game_id)),
        )
        .await;
    }

    pub async fn send_move(&self, player: &str, game_id: &str, position: Value) {
        self.send_message(
            player,
            WebSocketMessage::new(
                MessageType::PlayerMove,
                json!({ "gameId": game_id, "position": position }),
            ),
        )
        .await;
    }

    pub async fn send_collect(&self, player: &str, game_id: &str, shape_index: usize) {
        self.send_message(
            player,
            WebSocketMessage::new(
                MessageType::CollectShape,
                json!({ "gameId": game_id, "shapeIndex": shape_index }),
            ),
        )
        .await;
    }

    pub async fn disconnect(&self, player: &str) {
        self.router.handle_disconnect(player).await;
    }

    /// Create a game as `host` and have `guest` join it, clearing the join broadcast
    pub async fn start_two_player_game(&self, host: &str, guest: &str) -> String {
        let game_id = self.create_game(host).await;
        self.send_join(guest, &game_id).await;
        self.clear_messages().await;
        game_id
    }
}
