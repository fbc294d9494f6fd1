//! Search counters

use std::{fmt, ops::AddAssign};

use serde::{Deserialize, Serialize};

/// Node counts gathered during a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including the root and terminal leaves
    pub nodes: u64,
    /// Terminal positions scored
    pub terminal_nodes: u64,
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.terminal_nodes += other.terminal_nodes;
        self.cutoffs += other.cutoffs;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} terminal, {} cutoffs",
            self.nodes, self.terminal_nodes, self.cutoffs
        )
    }
}
