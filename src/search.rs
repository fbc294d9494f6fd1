//! Game-tree search
//!
//! The free functions below run a fresh [`AlphaBeta`] per call, so they share
//! no state and can be called from anywhere with any board.

pub mod alpha_beta;
pub mod minimax;
pub mod stats;

pub use alpha_beta::{AlphaBeta, Decision, NEG_INFINITY, POS_INFINITY};
pub use minimax::Minimax;
pub use stats::SearchStats;

use crate::{
    Result,
    tictactoe::{Board, Move, Player},
};

/// Value of `board` with X to move, inside the `(alpha, beta)` window
pub fn max_value(board: &Board, alpha: i32, beta: i32) -> i32 {
    AlphaBeta::new().max_value(board, alpha, beta)
}

/// Value of `board` with O to move, inside the `(alpha, beta)` window
pub fn min_value(board: &Board, alpha: i32, beta: i32) -> i32 {
    AlphaBeta::new().min_value(board, alpha, beta)
}

/// Exact minimax value of `board` with `player` to move
pub fn best_value(board: &Board, player: Player) -> i32 {
    AlphaBeta::new().best_value(board, player)
}

/// The optimal move for `player`, first in row-major order among equals.
///
/// Returns `Ok(None)` when the board is full.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] when a line is already complete.
pub fn best_move(board: &Board, player: Player) -> Result<Option<Move>> {
    AlphaBeta::new().best_move(board, player)
}

/// [`best_move`] together with the value it secures
pub fn best_decision(board: &Board, player: Player) -> Result<Option<Decision>> {
    AlphaBeta::new().best_decision(board, player)
}

/// Exact value of every available move for `player`
pub fn evaluate_moves(board: &Board, player: Player) -> Result<Vec<(Move, i32)>> {
    AlphaBeta::new().evaluate_moves(board, player)
}

/// Unpruned minimax value, for cross-checking the pruned search
pub fn minimax_value(board: &Board, player: Player) -> i32 {
    Minimax::new().value(board, player)
}
