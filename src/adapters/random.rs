//! Uniformly random baseline agent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::{Agent, AgentKind},
    tictactoe::{Board, Move, Player},
};

/// Picks any empty cell with equal probability
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<Move> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Computed
    }

    fn name(&self) -> &str {
        &self.name
    }
}
