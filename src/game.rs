use crate::{Board, Cell, GameConfig, GameError, MineSource, Position};
use log::{debug, info, trace};

/// Forward-only game lifecycle: `NotStarted -> Playing -> (Won | Lost)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Reveal,
    Flag,
}

/// A single game. All moves mutate it in place.
///
/// Moves that cannot apply (outside the board, on a revealed or flagged cell, or
/// after the game ended) leave the game untouched and only log why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    mine_count: u32,
    state: GameState,
    revealed_count: u32,
}

impl Game {
    pub fn new(width: u32, height: u32, mine_count: u32) -> Result<Self, GameError> {
        Self::from_config(GameConfig::new(width, height, mine_count))
    }

    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.width, config.height),
            mine_count: config.mines,
            state: GameState::NotStarted,
            revealed_count: 0,
        })
    }

    pub fn perform_action(&mut self, pos: Position, action: Action) -> GameState {
        match action {
            Action::Reveal => self.reveal(pos),
            Action::Flag => self.toggle_flag(pos),
        }
    }

    pub fn reveal(&mut self, pos: Position) -> GameState {
        self.reveal_with(pos, &mut rand::thread_rng())
    }

    /// Reveals a cell, drawing mine positions from `source` if this is the first click.
    ///
    /// The first click places the mines away from `pos` and then reveals `pos`
    /// like any later click, so a game can be won on its first move.
    pub fn reveal_with<S>(&mut self, pos: Position, source: &mut S) -> GameState
    where
        S: MineSource + ?Sized,
    {
        if let Some(reason) = self.blocked(pos, true) {
            info!("Ignoring reveal at {}: {}", pos, reason);
            return self.state;
        }

        if self.state == GameState::NotStarted {
            self.start(pos, source);
        }

        let Some(cell) = self.board.get_mut(pos) else {
            return self.state;
        };

        if cell.is_mine {
            cell.is_revealed = true;
            self.revealed_count += 1;
            self.state = GameState::Lost;
            info!("Mine revealed at {}, game lost", pos);
            return self.state;
        }

        let opened = self.flood_reveal(pos);
        debug!("Reveal at {} opened {} cells", pos, opened);

        self.check_win_condition();
        self.state
    }

    pub fn toggle_flag(&mut self, pos: Position) -> GameState {
        if let Some(reason) = self.blocked(pos, false) {
            info!("Ignoring flag at {}: {}", pos, reason);
            return self.state;
        }

        if let Some(cell) = self.board.get_mut(pos) {
            cell.is_flagged = !cell.is_flagged;
        }
        self.state
    }

    fn blocked(&self, pos: Position, flags_block: bool) -> Option<&'static str> {
        if self.state.is_terminal() {
            return Some("game is over");
        }
        match self.board.get(pos) {
            None => Some("invalid cell coordinates"),
            Some(cell) if cell.is_revealed => Some("cell already revealed"),
            Some(cell) if flags_block && cell.is_flagged => Some("cell is flagged"),
            Some(_) => None,
        }
    }

    fn start<S>(&mut self, first: Position, source: &mut S)
    where
        S: MineSource + ?Sized,
    {
        self.board.place_mines(self.mine_count, first, source);
        self.board.count_neighbour_bombs();
        self.state = GameState::Playing;
        debug!(
            "Placed {} mines avoiding first click at {}",
            self.mine_count, first
        );
    }

    /// Opens `origin` and cascades through cells with no neighbouring mines.
    ///
    /// Flagged cells stop the cascade and stay covered. Returns the number of
    /// cells opened.
    fn flood_reveal(&mut self, origin: Position) -> u32 {
        let mut stack = vec![origin];
        let mut opened = 0;

        while let Some(pos) = stack.pop() {
            let Some(cell) = self.board.get_mut(pos) else {
                continue;
            };
            if cell.is_revealed || cell.is_flagged {
                continue;
            }

            cell.is_revealed = true;
            opened += 1;
            trace!("Opened {} ({} neighbouring mines)", pos, cell.neighbour_bombs);

            if cell.neighbour_bombs == 0 {
                stack.extend(self.board.neighbors(pos));
            }
        }

        self.revealed_count += opened;
        opened
    }

    fn check_win_condition(&mut self) {
        if self.board.all_safe_revealed() {
            self.state = GameState::Won;
            info!("All safe cells revealed, game won");
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.board.dimensions()
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.board.get(pos)
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed_count
    }

    pub fn flag_count(&self) -> u32 {
        self.board.count_where(|cell| cell.is_flagged)
    }

    pub fn remaining_mines(&self) -> u32 {
        self.mine_count.saturating_sub(self.flag_count())
    }
}
