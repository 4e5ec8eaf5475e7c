use crate::{config::is_whole, GameError};
use itertools::iproduct;
use std::fmt;

/// A board coordinate. `row` indexes the outer dimension, `col` the inner one.
///
/// Coordinates are signed so that positions just off the board (as produced by
/// [`Position::neighbors`] at the edges, or by callers) stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The Moore neighbourhood: the 8 surrounding positions, without bounds checks.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .map(move |(dr, dc)| Position::new(self.row + dr, self.col + dc))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl TryFrom<(f64, f64)> for Position {
    type Error = GameError;

    /// Rejects fractions, NaN and infinities. Whole numbers beyond `i32` saturate,
    /// which keeps them off any board.
    fn try_from((row, col): (f64, f64)) -> Result<Self, Self::Error> {
        if is_whole(row) && is_whole(col) {
            Ok(Self::new(row as i32, col as i32))
        } else {
            Err(GameError::NonIntegerInput)
        }
    }
}
