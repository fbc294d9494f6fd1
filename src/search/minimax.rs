//! Plain minimax without pruning.
//!
//! Visits the whole subtree below every position. Used as the reference the
//! pruned search is checked against, and to measure how much pruning saves.

use super::{
    alpha_beta::{Decision, NEG_INFINITY, POS_INFINITY},
    stats::SearchStats,
};
use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// Exhaustive minimax searcher
#[derive(Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax value of `board` with `player` to move
    pub fn value(&mut self, board: &Board, player: Player) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            self.stats.terminal_nodes += 1;
            return board.score();
        }

        let mut best = match player {
            Player::X => NEG_INFINITY,
            Player::O => POS_INFINITY,
        };

        for mv in board.available_moves() {
            if let Ok(child) = board.apply(mv, player) {
                let value = self.value(&child, player.opponent());
                best = match player {
                    Player::X => best.max(value),
                    Player::O => best.min(value),
                };
            }
        }

        best
    }

    /// First row-major move reaching the minimax value.
    ///
    /// Returns `Ok(None)` on a full board.
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

        let mut best: Option<Decision> = None;
        for mv in moves {
            let child = board.apply(mv, player)?;
            let value = self.value(&child, player.opponent());
            let improves = match (player, best) {
                (_, None) => true,
                (Player::X, Some(incumbent)) => value > incumbent.value,
                (Player::O, Some(incumbent)) => value < incumbent.value,
            };
            if improves {
                best = Some(Decision { mv, value });
            }
        }

        Ok(best)
    }
}
