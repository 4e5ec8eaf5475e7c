//! Helpers for building games with a known mine layout.

use crate::{Game, MineSource, Position};
use std::collections::VecDeque;

/// Replays a fixed list of candidate mine positions.
///
/// Panics if placement asks for more candidates than were scripted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMines {
    queue: VecDeque<Position>,
}

impl ScriptedMines {
    pub fn new(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            queue: positions.into_iter().collect(),
        }
    }
}

impl MineSource for ScriptedMines {
    fn next_position(&mut self, _width: u32, _height: u32) -> Position {
        self.queue
            .pop_front()
            .expect("scripted mine source ran out of positions")
    }
}

/// Parses a layout drawn with `*` for mines and `.` for safe cells, one string per row.
///
/// Returns `(width, height, mines)`.
pub fn parse_layout(rows: &[&str]) -> (u32, u32, Vec<Position>) {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.chars().count()) as u32;
    let mines = rows
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == '*')
                .map(move |(col, _)| Position::new(row as i32, col as i32))
        })
        .collect();
    (width, height, mines)
}

/// Creates a game from a drawn layout and plays the first click at `first`.
pub fn game_from_layout(rows: &[&str], first: Position) -> Game {
    let (width, height, mines) = parse_layout(rows);
    let mut game = Game::new(width, height, mines.len() as u32).expect("valid layout");
    game.reveal_with(first, &mut ScriptedMines::new(mines));
    game
}

/// Renders the player's view: `#` covered, `F` flagged, `*` revealed mine, digits otherwise.
pub fn render(game: &Game) -> Vec<String> {
    let (width, height) = game.dimensions();
    (0..height as i32)
        .map(|row| {
            (0..width as i32)
                .map(|col| match game.cell(Position::new(row, col)) {
                    Some(cell) if cell.is_flagged => 'F',
                    Some(cell) if !cell.is_revealed => '#',
                    Some(cell) if cell.is_mine => '*',
                    Some(cell) => char::from(b'0' + cell.neighbour_bombs),
                    None => '?',
                })
                .collect()
        })
        .collect()
}
