//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use serde_json::{json, Value};

use shape_relay::websockets::{MessageType, WebSocketMessage};

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct MessageAssertion<'a> {
    setup: &'a TestSetup,
    players: Vec<&'a str>,
}

impl<'a> MessageAssertion<'a> {
    /// Create an assertion for all players in the setup
    pub fn for_all_players(setup: &'a TestSetup) -> Self {
        let players = setup.players.iter().map(|s| s.as_str()).collect();
        Self { setup, players }
    }

    /// Create an assertion for specific players
    pub fn for_players(setup: &'a TestSetup, players: Vec<&'a str>) -> Self {
        Self { setup, players }
    }

    /// Assert that players received a specific message type (consumes the message from queue)
    pub async fn received_message_type(self, expected_type: MessageType) -> MessageContent {
        let mut messages = vec![];

        for player in &self.players {
            let message = self
                .setup
                .mock_conn_manager
                .consume_message_for(player)
                .await;
            assert!(
                message.is_some(),
                "{} should have received a {} message",
                player,
                expected_type
            );

            let msg: WebSocketMessage = serde_json::from_str(&message.unwrap()).unwrap();
            assert_eq!(
                msg.message_type, expected_type,
                "{} received wrong message type",
                player
            );
            messages.push(msg);
        }

        // Broadcasts carry the same payload for every recipient
        if messages.len() > 1 {
            let first_payload = &messages[0].payload;
            for (i, msg) in messages.iter().enumerate().skip(1) {
                assert_eq!(
                    &msg.payload, first_payload,
                    "Player {} payload differs from player {}",
                    self.players[i], self.players[0]
                );
            }
        }

        MessageContent {
            payload: messages[0].payload.clone(),
        }
    }

    /// Assert that players received no messages
    pub async fn received_no_messages(self) {
        for player in &self.players {
            let messages = self.setup.mock_conn_manager.get_messages_for(player).await;
            assert!(
                messages.is_empty(),
                "{} should not have received any messages, got {:?}",
                player,
                messages
            );
        }
    }
}

// ============================================================================
// Message Content Assertions
// ============================================================================

pub struct MessageContent {
    pub payload: Value,
}

impl MessageContent {
    pub fn with_player_id(self, expected: &str) -> Self {
        assert_eq!(self.payload["playerId"], expected);
        self
    }

    pub fn with_players(self, expected: Vec<&str>) -> Self {
        assert_eq!(self.payload["players"], json!(expected));
        self
    }

    /// Compares the whole score map
    pub fn with_scores(self, expected: Value) -> Self {
        assert_eq!(self.payload["scores"], expected);
        self
    }

    pub fn with_shape_index(self, expected: usize) -> Self {
        assert_eq!(self.payload["shapeIndex"], json!(expected));
        self
    }

    pub fn with_position(self, expected: Value) -> Self {
        assert_eq!(self.payload["position"], expected);
        self
    }

    pub fn with_payload(self, expected: Value) -> Self {
        assert_eq!(self.payload, expected);
        self
    }
}
