//! Agent port - the capability a session needs from whoever picks moves
//!
//! A session does not care whether a move comes from a person at a terminal
//! or from the search engine. It asks an [`Agent`] and uses [`AgentKind`] to
//! decide how to schedule the request.

use crate::{
    Result,
    tictactoe::{Board, Move, Player},
};

/// How an agent produces its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    /// Blocks on external input; the call is the suspension point
    Interactive,
    /// Computes the move directly and returns without waiting on anyone
    Computed,
}

/// Move provider for one side of a game.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::{Agent, AgentKind},
///     tictactoe::{Board, Move, Player},
///     Result,
/// };
///
/// struct FirstFree;
///
/// impl Agent for FirstFree {
///     fn select_move(&mut self, board: &Board, _player: Player) -> Result<Move> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn kind(&self) -> AgentKind {
///         AgentKind::Computed
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mv = FirstFree.select_move(&Board::new(), Player::X).unwrap();
/// assert_eq!(mv, Move::new(0, 0).unwrap());
/// ```
pub trait Agent {
    /// Choose a move for `player` on `board`.
    ///
    /// The returned move must name an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, for example because the
    /// board is full or an input stream closed.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Move>;

    /// Whether the session should treat this agent as interactive or computed
    fn kind(&self) -> AgentKind;

    /// Name used in console output
    fn name(&self) -> &str;
}
