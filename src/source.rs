use crate::Position;
use rand::{Rng, RngCore};

/// Supplies candidate mine positions during the deferred placement on the first click.
///
/// Placement is rejection sampling: candidates equal to the clicked cell, already
/// mined, or outside the board are skipped, so a source only has to eventually
/// cover enough free cells.
pub trait MineSource {
    fn next_position(&mut self, width: u32, height: u32) -> Position;
}

impl<R: RngCore> MineSource for R {
    fn next_position(&mut self, width: u32, height: u32) -> Position {
        let row = self.gen_range(0..height) as i32;
        let col = self.gen_range(0..width) as i32;
        Position::new(row, col)
    }
}
