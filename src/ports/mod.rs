//! Ports (trait boundaries) between the game engine and its callers.

pub mod agent;

pub use agent::{Agent, AgentKind};
