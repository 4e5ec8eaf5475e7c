use crate::{MineSource, Position};
use log::warn;
use ndarray::{Array2, Zip};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the surrounding cells. Only meaningful for non-mine cells once
    /// mines have been placed.
    pub neighbour_bombs: u8,
}

/// Rectangular grid of cells, `height` rows by `width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: Array2::default((height as usize, width as usize)),
        }
    }

    pub fn width(&self) -> u32 {
        self.cells.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.cells.nrows() as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    fn index(&self, pos: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.cells.nrows() && col < self.cells.ncols()).then_some((row, col))
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).map(move |idx| &mut self.cells[idx])
    }

    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().filter(move |p| self.is_within_bounds(*p))
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> u8 {
        self.neighbors(pos)
            .filter(|p| self.get(*p).is_some_and(|cell| cell.is_mine))
            .count() as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (Position::new(row as i32, col as i32), cell))
    }

    pub fn mine_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> u32 {
        self.cells.iter().filter(|cell| pred(cell)).count() as u32
    }

    pub fn all_safe_revealed(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine || cell.is_revealed)
    }

    /// Places exactly `count` mines, never on `exclude`.
    ///
    /// The caller guarantees `count` is below the number of cells, otherwise this
    /// would never terminate.
    pub(crate) fn place_mines<S>(&mut self, count: u32, exclude: Position, source: &mut S)
    where
        S: MineSource + ?Sized,
    {
        let (width, height) = self.dimensions();
        let mut placed = 0;

        while placed < count {
            let pos = source.next_position(width, height);
            if pos == exclude {
                continue;
            }
            match self.get_mut(pos) {
                Some(cell) if !cell.is_mine => {
                    cell.is_mine = true;
                    placed += 1;
                }
                Some(_) => {}
                None => warn!("Mine source produced out-of-bounds position {}", pos),
            }
        }
    }

    pub(crate) fn count_neighbour_bombs(&mut self) {
        let counts = Array2::from_shape_fn(self.cells.dim(), |(row, col)| {
            self.count_adjacent_mines(Position::new(row as i32, col as i32))
        });

        Zip::from(&mut self.cells)
            .and(&counts)
            .for_each(|cell, &count| {
                if !cell.is_mine {
                    cell.neighbour_bombs = count;
                }
            });
    }
}
