//! Agent backed by the alpha-beta search

use crate::{
    Error, Result,
    ports::{Agent, AgentKind},
    search::{AlphaBeta, Decision, SearchStats},
    tictactoe::{Board, Move, Player},
};

/// Plays the optimal move for whichever side it is asked to move
#[derive(Debug)]
pub struct ComputedAgent {
    name: String,
    last_decision: Option<Decision>,
    last_stats: SearchStats,
    total_stats: SearchStats,
}

impl ComputedAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_decision: None,
            last_stats: SearchStats::default(),
            total_stats: SearchStats::default(),
        }
    }

    /// Move and value from the most recent search
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    /// Counters from the most recent search
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Counters summed over every search this agent has run
    pub fn total_stats(&self) -> SearchStats {
        self.total_stats
    }
}

impl Default for ComputedAgent {
    fn default() -> Self {
        Self::new("Computer")
    }
}

impl Agent for ComputedAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Move> {
        let mut search = AlphaBeta::new();
        let decision = search.best_decision(board, player)?;
        self.last_stats = search.stats();
        self.total_stats += self.last_stats;
        self.last_decision = decision;
        decision.map(|d| d.mv).ok_or(Error::NoValidMoves)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Computed
    }

    fn name(&self) -> &str {
        &self.name
    }
}
