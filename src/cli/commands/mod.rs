//! Subcommands of the `noughts` binary

pub mod analyze;
pub mod play;
pub mod self_play;

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Like [`parse_player_token`], but also accepts `none`
pub(crate) fn parse_seat(value: &str, flag: &str) -> Result<Option<Player>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "engine" => Ok(None),
        _ => parse_player_token(value, flag).map(Some),
    }
}
