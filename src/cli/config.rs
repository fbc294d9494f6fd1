//! Configuration for the console commands

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, session::SessionConfig, tictactoe::Player};

/// Settings for `noughts play`.
///
/// Loaded from a JSON file when `--config` is given; missing fields take
/// their defaults and command-line flags override whatever the file says.
///
/// ```
/// use noughts::{cli::config::PlayConfig, tictactoe::Player};
///
/// let config: PlayConfig = serde_json::from_str(r#"{ "human": "O" }"#).unwrap();
/// assert_eq!(config.human, Some(Player::O));
/// assert_eq!(config.session.computer_delay_ms, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Side controlled from the keyboard; `None` lets the engine play both
    pub human: Option<Player>,

    /// Driver settings
    pub session: SessionConfig,

    /// Print search statistics when the game ends
    pub verbose: bool,
}

impl PlayConfig {
    /// Read a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("open config {}", path.display()), e))?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::io(format!("create config {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn with_human(mut self, human: Option<Player>) -> Self {
        self.human = human;
        self
    }

    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Some(Player::X),
            session: SessionConfig::default(),
            verbose: false,
        }
    }
}
