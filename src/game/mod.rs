// Public API - what other modules can use
pub use models::{GameModel, Shape, MAX_PLAYERS, SHAPE_POINTS};
pub use repository::{GameRepository, InMemoryGameRepository};
pub use service::GameService;
pub use types::{CollectShapeResult, JoinGameResult, LeaveGameResult};

// Internal modules
pub mod generators;
pub mod models;
pub mod repository;
mod service;
pub mod types;
