//! Reachability checks for boards built outside of play

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};
use crate::{Error, Result};

impl Board {
    /// Check whether the board can arise from the empty board by alternating
    /// moves starting with X
    pub fn is_reachable(&self) -> bool {
        self.check_reachable().is_ok()
    }

    /// Like [`Board::is_reachable`], but reports which rule is broken.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreachableBoard`] with the reason when:
    /// - X does not have the same number of pieces as O or exactly one more
    /// - both players own a complete line
    /// - the winner was not the last player to move
    /// - one player owns several lines that no single move could complete
    pub fn check_reachable(&self) -> Result<()> {
        let count = self.count_pieces();
        let unreachable = |reason: String| Err(Error::UnreachableBoard { reason });

        if !(count.x == count.o || count.x == count.o + 1) {
            return unreachable(format!(
                "piece counts X={}, O={} (X must equal O or lead by one)",
                count.x, count.o
            ));
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return unreachable("both players have winning lines".to_string());
        }
        if x_wins && count.x != count.o + 1 {
            return unreachable("X has a winning line but O moved after it".to_string());
        }
        if o_wins && count.x != count.o {
            return unreachable("O has a winning line but X moved after it".to_string());
        }

        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return unreachable(format!(
                    "{player} has winning lines that do not share a cell"
                ));
            }
        }

        Ok(())
    }

    /// Check if all winning lines for a player share at least one cell.
    ///
    /// Two lines can only be completed together when the final move lies on
    /// both of them. Trivially true for zero or one line.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::winning_lines(self.cells(), player);
        if lines.len() <= 1 {
            return true;
        }
        lines[0]
            .iter()
            .any(|cell| lines.iter().all(|line| line.contains(cell)))
    }
}
