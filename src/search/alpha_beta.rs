//! Minimax with alpha-beta pruning
//!
//! X maximizes and O minimizes the utility of the final board. Moves are
//! always tried in row-major order and the root keeps the first move that
//! reaches the best value, so the chosen move is deterministic.

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;
use crate::{
    Error, Result,
    tictactoe::{Board, Move, Player},
};

/// Stand-in for minus infinity; below every utility
pub const NEG_INFINITY: i32 = i32::MIN;
/// Stand-in for plus infinity; above every utility
pub const POS_INFINITY: i32 = i32::MAX;

/// A chosen move and its exact minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub mv: Move,
    pub value: i32,
}

/// Alpha-beta searcher.
///
/// Holds only the counters of the searches it has run; create one per call
/// site, or use the free functions in [`crate::search`].
#[derive(Debug, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since creation or the last [`AlphaBeta::reset_stats`]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Value of `board` with X to move, searched inside the `(alpha, beta)` window
    pub fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            self.stats.terminal_nodes += 1;
            return board.score();
        }

        let mut v = NEG_INFINITY;
        for mv in board.available_moves() {
            let Ok(child) = board.apply(mv, Player::X) else {
                continue;
            };
            v = v.max(self.min_value(&child, alpha, beta));
            if v >= beta {
                self.stats.cutoffs += 1;
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }

    /// Value of `board` with O to move, searched inside the `(alpha, beta)` window
    pub fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            self.stats.terminal_nodes += 1;
            return board.score();
        }

        let mut v = POS_INFINITY;
        for mv in board.available_moves() {
            let Ok(child) = board.apply(mv, Player::O) else {
                continue;
            };
            v = v.min(self.max_value(&child, alpha, beta));
            if v <= alpha {
                self.stats.cutoffs += 1;
                return v;
            }
            beta = beta.min(v);
        }
        v
    }

    /// Exact minimax value of `board` with `player` to move
    pub fn best_value(&mut self, board: &Board, player: Player) -> i32 {
        match player {
            Player::X => self.max_value(board, NEG_INFINITY, POS_INFINITY),
            Player::O => self.min_value(board, NEG_INFINITY, POS_INFINITY),
        }
    }

    /// Best move for `player`; see [`AlphaBeta::best_decision`]
    pub fn best_move(&mut self, board: &Board, player: Player) -> Result<Option<Move>> {
        Ok(self.best_decision(board, player)?.map(|decision| decision.mv))
    }

    /// Pick the move for `player` together with its value.
    ///
    /// Candidates are evaluated in row-major order and a later move replaces
    /// the incumbent only with a strictly better value, so the first optimal
    /// move wins ties. The incumbent is always searched with a window it
    /// improves on, so its value is exact.
    ///
    /// Returns `Ok(None)` when the board is full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if a player has already completed a line.
    pub fn best_decision(&mut self, board: &Board, player: Player) -> Result<Option<Decision>> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Ok(None);
        }
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        let mut alpha = NEG_INFINITY;
        let mut beta = POS_INFINITY;
        let mut best: Option<Decision> = None;
        let mut best_value = match player {
            Player::X => NEG_INFINITY,
            Player::O => POS_INFINITY,
        };

        for mv in moves {
            let child = board.apply(mv, player)?;
            match player {
                Player::X => {
                    let value = self.min_value(&child, alpha, beta);
                    if value > best_value {
                        best_value = value;
                        best = Some(Decision { mv, value });
                    }
                    alpha = alpha.max(best_value);
                }
                Player::O => {
                    let value = self.max_value(&child, alpha, beta);
                    if value < best_value {
                        best_value = value;
                        best = Some(Decision { mv, value });
                    }
                    beta = beta.min(best_value);
                }
            }
        }

        Ok(best)
    }

    /// Exact value of every available move for `player`, row-major.
    ///
    /// Each successor is searched with a full window, so unlike
    /// [`AlphaBeta::best_decision`] no value is a bound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if a player has already completed a line.
    pub fn evaluate_moves(&mut self, board: &Board, player: Player) -> Result<Vec<(Move, i32)>> {
        if board.winner().is_some() {
            return Err(Error::GameOver);
        }

        board
            .available_moves()
            .into_iter()
            .map(|mv| {
                let child = board.apply(mv, player)?;
                Ok((mv, self.best_value(&child, player.opponent())))
            })
            .collect()
    }
}
