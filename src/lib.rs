//! Exact alpha-beta engine for 3x3 tic-tac-toe
//!
//! This crate provides:
//! - Board rules: legality, win detection, terminal utility
//! - Minimax search with alpha-beta pruning, plus an unpruned reference
//! - A turn-taking session driver with pluggable agents
//! - The `noughts` command-line front end

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{AlphaBeta, Decision, SearchStats};
pub use session::{GameSession, SessionConfig, SessionDriver};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Move, Player};
