use super::{Board, Coord, Player, WinningRun};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { player: Player, run: WinningRun },
    Draw,
}

/// Snapshot of a game: board, whose turn it is, and how it ended (if it has).
///
/// The state is locked exactly when `outcome` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) outcome: Option<GameOutcome>,
}

impl GameState {
    /// Fresh state on `board`: Player One to move, nothing decided.
    pub(super) fn initial(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next drop places. After a win this stays the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// True once the game is won or drawn; moves are refused until reset.
    pub fn is_locked(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.outcome, Some(GameOutcome::Draw))
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Won { player, .. }) => Some(player),
            _ => None,
        }
    }

    pub fn winning_run(&self) -> Option<&WinningRun> {
        match &self.outcome {
            Some(GameOutcome::Won { run, .. }) => Some(run),
            _ => None,
        }
    }
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// No result yet; `next` moves now.
    Continue { next: Player },
    Won(WinningRun),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Who moved
    pub player: Player,
    /// Where the piece landed
    pub at: Coord,
    pub status: MoveStatus,
}

impl MoveResult {
    pub fn is_locked(&self) -> bool {
        !matches!(self.status, MoveStatus::Continue { .. })
    }

    pub fn winning_run(&self) -> Option<&WinningRun> {
        match &self.status {
            MoveStatus::Won(run) => Some(run),
            _ => None,
        }
    }
}
