use super::models::{GameModel, Shape};

/// Result of attempting to join a game
#[derive(Debug, Clone, PartialEq)]
pub enum JoinGameResult {
    /// Joined (or was already a member), returns the updated game
    Success(GameModel),
    /// Game already has two players
    GameFull,
    /// Game does not exist
    GameNotFound,
}

impl JoinGameResult {
    /// Message sent back to a player whose join was refused
    pub const ERROR_MESSAGE: &'static str = "Game not found or full";
}

/// Result of attempting to collect a shape
#[derive(Debug, Clone, PartialEq)]
pub enum CollectShapeResult {
    /// Score awarded. `removed` is the shape slot taken out, if the index was in range.
    Success {
        game: GameModel,
        removed: Option<Shape>,
    },
    /// Collector is not a player of this game
    NotAPlayer,
    /// Game does not exist
    GameNotFound,
}

/// What happened to one game when a connection was removed from it
#[derive(Debug, Clone, PartialEq)]
pub enum LeaveGameResult {
    /// Game survives with the remaining players
    Left(GameModel),
    /// Last player left, the game was deleted
    GameDeleted(String),
}
