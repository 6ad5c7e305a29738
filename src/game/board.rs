use std::fmt;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A board position. Row 0 is the bottom row, column 0 the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, bottom row first.
    cells: Vec<Cell>,
    /// Next free row per column; `height` once the column is full.
    cursors: Vec<usize>,
}

impl Board {
    /// Create a new empty 7×6 board
    pub fn new() -> Self {
        Self::with_size(COLS, ROWS)
    }

    /// Create an empty board of arbitrary size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            cursors: vec![0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Row the next piece dropped in `col` would land on.
    pub fn cursor(&self, col: usize) -> usize {
        self.cursors[col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.cursors.get(col) {
            Some(&cursor) => cursor >= self.height,
            None => true,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cursors.iter().sum()
    }

    /// Place `cell` on top of column `col` and return where it landed.
    ///
    /// Callers validate the column first; the engine never asks for a drop
    /// into a full or out-of-range column.
    pub(super) fn drop_piece(&mut self, col: usize, cell: Cell) -> Coord {
        debug_assert!(!self.is_column_full(col));
        let row = self.cursors[col];
        self.cells[row * self.width + col] = cell;
        self.cursors[col] += 1;
        Coord::new(row, col)
    }

    /// Clear every cell and rewind every cursor to row 0.
    pub(super) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.cursors.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per row, top row first, using the default player symbols.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for col in 0..self.width {
                let symbol = self.get(row, col).player().map_or(".", Player::symbol);
                f.write_str(symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
