use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// Named events exchanged over the socket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MessageType {
    // Client -> Server
    CreateGame,
    JoinGame,
    PlayerMove,
    CollectShape,

    // Server -> Client
    GameCreated,
    PlayerJoined,
    JoinError,
    OpponentMove,
    ShapeCollected,
    PlayerLeft,
}

/// Metadata for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessageMeta {
    pub timestamp: DateTime<Utc>,
    pub player_id: Option<String>,
}

/// Base structure for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default)]
    pub meta: Option<WebSocketMessageMeta>,
}

// Client-to-Server message payloads

/// `joinGame` carries the bare game id; an object with `gameId` is accepted too
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JoinGamePayload {
    Id(String),
    Object {
        #[serde(rename = "gameId")]
        game_id: String,
    },
}

impl JoinGamePayload {
    pub fn game_id(&self) -> &str {
        match self {
            JoinGamePayload::Id(id) => id,
            JoinGamePayload::Object { game_id } => game_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMovePayload {
    pub game_id: String,
    pub position: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectShapePayload {
    pub game_id: String,
    pub shape_index: usize,
}

// Server-to-Client message payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreatedPayload {
    pub game_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerJoinedPayload {
    pub players: Vec<String>,
    pub scores: HashMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentMovePayload {
    pub player_id: String,
    pub position: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeCollectedPayload {
    pub player_id: String,
    pub shape_index: usize,
    pub scores: HashMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLeftPayload {
    pub player_id: String,
    pub players: Vec<String>,
    pub scores: HashMap<String, i64>,
}

/// Helper functions for creating messages
impl WebSocketMessage {
    pub fn new(message_type: MessageType, payload: serde_json::Value) -> Self {
        Self {
            message_type,
            payload,
            meta: Some(WebSocketMessageMeta {
                timestamp: Utc::now(),
                player_id: None,
            }),
        }
    }

    /// Create a gameCreated message
    pub fn game_created(game_id: &str) -> Self {
        Self::new(MessageType::GameCreated, json!({ "gameId": game_id }))
    }

    /// Create a playerJoined message
    pub fn player_joined(players: &[String], scores: &HashMap<String, i64>) -> Self {
        Self::new(
            MessageType::PlayerJoined,
            json!({ "players": players, "scores": scores }),
        )
    }

    /// Create a joinError message. The payload is the bare error string.
    pub fn join_error(message: &str) -> Self {
        Self::new(MessageType::JoinError, json!(message))
    }

    /// Create an opponentMove message
    pub fn opponent_move(player_id: &str, position: serde_json::Value) -> Self {
        Self::new(
            MessageType::OpponentMove,
            json!({ "playerId": player_id, "position": position }),
        )
    }

    /// Create a shapeCollected message
    pub fn shape_collected(
        player_id: &str,
        shape_index: usize,
        scores: &HashMap<String, i64>,
    ) -> Self {
        Self::new(
            MessageType::ShapeCollected,
            json!({ "playerId": player_id, "shapeIndex": shape_index, "scores": scores }),
        )
    }

    /// Create a playerLeft message
    pub fn player_left(player_id: &str, players: &[String], scores: &HashMap<String, i64>) -> Self {
        Self::new(
            MessageType::PlayerLeft,
            json!({ "playerId": player_id, "players": players, "scores": scores }),
        )
    }
}
