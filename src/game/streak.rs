//! Run detection around the most recently played cell.

use super::{Board, Cell, Coord, Player};

/// Marks in a row needed to win.
pub const RUN_LENGTH: usize = 4;

/// The four lines a run can lie on, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, `/`
    DiagonalUpRight,
    /// Bottom-right to top-left, `\`
    DiagonalUpLeft,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalUpRight,
        Axis::DiagonalUpLeft,
    ];

    /// `(Δrow, Δcol)` of one step toward the positive end of the axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalUpRight => (1, 1),
            Axis::DiagonalUpLeft => (1, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
            Axis::DiagonalUpRight => "diagonal-up-right",
            Axis::DiagonalUpLeft => "diagonal-up-left",
        }
    }
}

/// Four winning cells, ordered from the negative end of `axis` to the
/// positive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningRun {
    pub axis: Axis,
    pub cells: [Coord; RUN_LENGTH],
}

impl WinningRun {
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Look for a run of `player`'s marks through `origin`.
///
/// Axes are tried in [`Axis::ALL`] order and the first one holding
/// [`RUN_LENGTH`] cells wins. Along each axis the negative direction is
/// walked before the positive one, and collection stops at `RUN_LENGTH`
/// cells, so a longer run always reports the same four cells.
pub fn find_run(board: &Board, origin: Coord, player: Player) -> Option<WinningRun> {
    let cell = player.to_cell();
    if board.get(origin.row, origin.col) != cell {
        return None;
    }

    Axis::ALL
        .into_iter()
        .find_map(|axis| run_along(board, origin, cell, axis))
}

fn run_along(board: &Board, origin: Coord, cell: Cell, axis: Axis) -> Option<WinningRun> {
    let (dr, dc) = axis.step();
    let backward = walk(board, origin, cell, (-dr, -dc), RUN_LENGTH - 1);
    let forward = walk(board, origin, cell, (dr, dc), RUN_LENGTH - 1 - backward);

    if 1 + backward + forward < RUN_LENGTH {
        return None;
    }

    let start_row = origin.row as isize - dr * backward as isize;
    let start_col = origin.col as isize - dc * backward as isize;
    let cells = std::array::from_fn(|i| {
        let i = i as isize;
        Coord::new((start_row + dr * i) as usize, (start_col + dc * i) as usize)
    });

    Some(WinningRun { axis, cells })
}

/// Count matching cells stepping away from `origin`, at most `limit`.
fn walk(board: &Board, origin: Coord, cell: Cell, (dr, dc): (isize, isize), limit: usize) -> usize {
    let mut row = origin.row as isize;
    let mut col = origin.col as isize;
    let mut count = 0;

    while count < limit {
        row += dr;
        col += dc;
        if !board.contains(row, col) || board.get(row as usize, col as usize) != cell {
            break;
        }
        count += 1;
    }

    count
}
