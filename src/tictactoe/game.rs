//! Game outcomes and move transcripts

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Player};
use crate::{Error, Result};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedMove {
    pub mv: Move,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Map a utility value (+1, -1, 0) to an outcome
    pub fn from_utility(value: i32) -> Self {
        match value.signum() {
            1 => GameOutcome::Win(Player::X),
            -1 => GameOutcome::Win(Player::O),
            _ => GameOutcome::Draw,
        }
    }

    /// Outcome of a terminal board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`] if the game is still in progress.
    pub fn of(board: &Board) -> Result<Self> {
        board.utility().map(Self::from_utility)
    }

    /// Announcement printed when the game ends
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::Win(Player::X) => "X wins!",
            GameOutcome::Win(Player::O) => "O wins!",
            GameOutcome::Draw => "It's a tie!",
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<PlacedMove>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start a transcript from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        let outcome = GameOutcome::of(&initial).ok();
        Game {
            initial,
            moves: Vec::new(),
            outcome,
        }
    }

    /// Record a move by `player`
    pub fn play(&mut self, mv: Move, player: Player) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let next = self.current_board()?.apply(mv, player)?;
        self.moves.push(PlacedMove { mv, player });
        self.outcome = GameOutcome::of(&next).ok();

        Ok(())
    }

    /// Replay the history onto the initial board.
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move targets an occupied cell, which means
    /// the transcript was corrupted.
    pub fn current_board(&self) -> Result<Board> {
        self.moves
            .iter()
            .try_fold(self.initial, |board, placed| board.apply(placed.mv, placed.player))
    }

    /// Number of moves played
    pub fn ply(&self) -> usize {
        self.moves.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
