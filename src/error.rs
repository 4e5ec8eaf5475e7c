use crate::config::MIN_SIDE;
use thiserror::Error;

/// Errors raised when a game cannot be constructed.
///
/// Invalid moves on an existing game are not errors; they are logged and ignored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size {width}x{height} is too small, it should be at least {min}x{min}", min = MIN_SIDE)]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid mine count {mines} for board size {width}x{height}, it should be between 1 and {}", max_mines(.width, .height))]
    InvalidMineCount { width: u32, height: u32, mines: u32 },
    #[error("Width, height, mine count and coordinates should be whole numbers")]
    NonIntegerInput,
}

fn max_mines(width: &u32, height: &u32) -> u64 {
    (u64::from(*width) * u64::from(*height)).saturating_sub(1)
}
