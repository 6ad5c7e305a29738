//! Core Connect Four logic: board storage, players, run detection and the
//! engine that turns column choices into moves.

mod board;
mod engine;
mod player;
mod state;
mod streak;

pub use board::{Board, Cell, Coord, COLS, ROWS};
pub use engine::Engine;
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveResult, MoveStatus};
pub use streak::{find_run, Axis, WinningRun, RUN_LENGTH};

pub use crate::error::MoveError;
