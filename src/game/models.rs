use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of players in a single game
pub const MAX_PLAYERS: usize = 2;

/// Points awarded for each collected shape
pub const SHAPE_POINTS: i64 = 10;

/// A collectible slot. Shape geometry is owned by the clients, so the server keeps it opaque.
pub type Shape = serde_json::Value;

/// In-memory model of one live game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModel {
    pub id: String,                  // Short random token handed out to players
    pub players: Vec<String>,        // Connection ids in join order, at most MAX_PLAYERS
    pub scores: HashMap<String, i64>, // Connection id -> score, same keys as players
    pub shapes: Vec<Shape>,          // Collectible slots, only ever removed
}

impl GameModel {
    /// Creates a game with the creator as its only player
    pub fn new(id: String, creator: String) -> Self {
        let mut scores = HashMap::new();
        scores.insert(creator.clone(), 0);

        Self {
            id,
            players: vec![creator],
            scores,
            shapes: Vec::new(),
        }
    }

    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn has_player(&self, connection_id: &str) -> bool {
        self.players.iter().any(|p| p == connection_id)
    }

    /// Add a player with a zero score. Returns false if the player was already present.
    pub fn add_player(&mut self, connection_id: &str) -> bool {
        if self.has_player(connection_id) {
            return false;
        }
        self.players.push(connection_id.to_string());
        self.scores.insert(connection_id.to_string(), 0);
        true
    }

    /// Remove a player and its score. Returns false if the player was not present.
    pub fn remove_player(&mut self, connection_id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p != connection_id);
        self.scores.remove(connection_id);
        self.players.len() != before
    }

    /// Award points to a collector and drop the shape slot at `index` if it exists.
    ///
    /// An out-of-range index still scores but removes nothing.
    pub fn collect_shape(&mut self, connection_id: &str, index: usize) -> Option<Shape> {
        *self.scores.entry(connection_id.to_string()).or_insert(0) += SHAPE_POINTS;

        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// Players other than `connection_id`
    pub fn other_players(&self, connection_id: &str) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| p.as_str() != connection_id)
            .cloned()
            .collect()
    }
}
