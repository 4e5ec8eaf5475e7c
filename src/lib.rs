pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod position;
pub mod source;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use board::{Board, Cell};
pub use config::{GameConfig, MIN_SIDE};
pub use error::GameError;
pub use game::{Action, Game, GameState};
pub use position::Position;
pub use source::MineSource;
