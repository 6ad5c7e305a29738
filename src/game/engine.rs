use tracing::{debug, info};

use super::streak::find_run;
use super::{Board, GameOutcome, GameState, MoveResult, MoveStatus, Player};
use crate::error::MoveError;

/// Owns one game and is the only way to change it.
///
/// Every session creates its own engine; nothing is shared between them.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Engine on the standard 7×6 board.
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Engine on a board shaped like `board`. Any pieces already on it are
    /// cleared, so the game always starts empty and unlocked.
    pub fn with_board(mut board: Board) -> Self {
        board.clear();
        Engine {
            state: GameState::initial(board),
        }
    }

    /// Read-only view for rendering.
    pub fn inspect(&self) -> &GameState {
        &self.state
    }

    /// Drop the current player's piece into `column`.
    ///
    /// All checks happen before the board is touched, so an error leaves the
    /// game exactly as it was.
    pub fn submit_move(&mut self, column: isize) -> Result<MoveResult, MoveError> {
        if self.state.is_locked() {
            return Err(MoveError::GameLocked);
        }

        let board = &mut self.state.board;
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < board.width())
            .ok_or(MoveError::InvalidColumn {
                column,
                width: board.width(),
            })?;
        if board.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        let player = self.state.current_player;
        let at = board.drop_piece(col, player.to_cell());
        debug!(player = %player, row = at.row, col = at.col, "piece placed");

        let status = if let Some(run) = find_run(board, at, player) {
            info!(player = %player, axis = run.axis.name(), "game won");
            debug!("final position:\n{board}");
            self.state.outcome = Some(GameOutcome::Won { player, run });
            MoveStatus::Won(run)
        } else if board.is_full() {
            info!(moves = board.occupied(), "game drawn");
            debug!("final position:\n{board}");
            self.state.outcome = Some(GameOutcome::Draw);
            MoveStatus::Draw
        } else {
            let next = player.other();
            self.state.current_player = next;
            MoveStatus::Continue { next }
        };

        Ok(MoveResult { player, at, status })
    }

    /// Start over: empty board, Player One to move, unlocked.
    pub fn reset(&mut self) {
        self.state.board.clear();
        self.state.current_player = Player::One;
        self.state.outcome = None;
        info!("game reset");
    }

    /// Columns that would accept a drop right now. Empty while locked.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.state.is_locked() {
            return Vec::new();
        }
        let board = &self.state.board;
        (0..board.width())
            .filter(|&col| !board.is_column_full(col))
            .collect()
    }

    pub fn move_count(&self) -> usize {
        self.state.board.occupied()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
