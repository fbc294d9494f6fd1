//! CLI infrastructure for the `noughts` binary
//!
//! Subcommands live in [`commands`]; console helpers in [`output`].

pub mod commands;
pub mod config;
pub mod output;
