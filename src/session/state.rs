//! Game session state machine
//!
//! A session is a value: accepting a move consumes it and returns the next
//! session. Callers reassign their binding instead of mutating a shared board.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{Board, GameOutcome, Move, Player},
};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for `Player` to move
    AwaitingMove(Player),
    /// The game has ended
    Finished(GameOutcome),
}

/// A board together with the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    active_player: Player,
}

impl GameSession {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
        }
    }

    /// Resume from a position, inferring the side to move from piece counts.
    ///
    /// # Errors
    ///
    /// Returns error if the board cannot arise from alternating play.
    pub fn from_board(board: Board) -> Result<Self> {
        board.check_reachable()?;
        Ok(Self {
            active_player: board.to_move()?,
            board,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn phase(&self) -> Phase {
        match GameOutcome::of(&self.board) {
            Ok(outcome) => Phase::Finished(outcome),
            Err(_) => Phase::AwaitingMove(self.active_player),
        }
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Whether `mv` would be accepted: the game is running and the cell is empty
    pub fn can_accept(&self, mv: Move) -> bool {
        !self.is_over() && self.board.available_moves().contains(&mv)
    }

    /// Play `mv` for the active player and hand the turn over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the game has ended, or the board's
    /// error if the cell is occupied or out of range.
    #[must_use = "accept returns the next session; the original is unchanged"]
    pub fn accept(self, mv: Move) -> Result<Self> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        Ok(Self {
            board: self.board.apply(mv, self.active_player)?,
            active_player: self.active_player.opponent(),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
