//! Tic-Tac-Toe board, rules and game records

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, Move, Player, SIZE};
pub use game::{Game, GameOutcome, PlacedMove};
pub use game_tree::{collect_reachable_boards, format_board};
pub use lines::{LineAnalyzer, WINNING_LINES};
