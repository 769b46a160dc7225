use super::{Board, Player};
use crate::error::BoardError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Why a move attempt was rejected. A rejected move never changes the
/// board and never consumes the turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate is outside the board")]
    OutOfBounds,

    #[error("that cell is already occupied")]
    CellOccupied,

    #[error("the game is already over")]
    GameOver,
}

/// The turn state machine. Owns the board; every placement flows through
/// [`GameState::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on the given board. Player One moves first.
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Start a game on a fresh rows x cols board.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Self::new(Board::new(rows, cols)?))
    }

    /// Get current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply the active player's move at (row, col). On success the game
    /// either ends (win at the placed coordinate, or draw on a full board)
    /// or the turn passes to the other player.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .place(row, col, self.current_player.to_cell())
            .map_err(|e| match e {
                BoardError::OutOfBounds { .. } => MoveError::OutOfBounds,
                // place only reports OutOfBounds or CellOccupied
                _ => MoveError::CellOccupied,
            })?;

        if self.board.check_win(row, col) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(())
    }
}
