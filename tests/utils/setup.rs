use std::sync::Arc;
use tokio::sync::mpsc;

use shape_relay::{
    websockets::ConnectionManager, GameEventRouter, GameService, InMemoryGameRepository,
};

use super::mocks::MockConnectionManager;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub game_service: Arc<GameService>,
    pub mock_conn_manager: Arc<MockConnectionManager>,
    pub router: GameEventRouter,
    pub players: Vec<String>,
}

pub struct TestSetupBuilder {
    players: Vec<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    pub fn with_players(mut self, players: Vec<&str>) -> Self {
        self.players = players.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_two_players(self) -> Self {
        self.with_players(vec!["alice", "bob"])
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(vec!["alice", "bob", "carol"])
    }

    pub async fn build(self) -> TestSetup {
        let game_service = Arc::new(GameService::new(Arc::new(InMemoryGameRepository::new())));
        let mock_conn_manager = Arc::new(MockConnectionManager::new());

        // Connect players
        for player in &self.players {
            let (sender, _receiver) = mpsc::unbounded_channel();
            mock_conn_manager.add_connection(player.clone(), sender).await;
        }

        let router = GameEventRouter::new(Arc::clone(&game_service), mock_conn_manager.clone());

        TestSetup {
            game_service,
            mock_conn_manager,
            router,
            players: self.players,
        }
    }
}
