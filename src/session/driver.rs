//! Turn-taking driver that runs a session between two agents

use std::{io::Write, thread, time::Duration};

use serde::{Deserialize, Serialize};

use super::state::{GameSession, Phase};
use crate::{
    Error, Result,
    ports::{Agent, AgentKind},
    tictactoe::{Game, Player},
};

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause before asking a computed agent for its move, in milliseconds
    pub computer_delay_ms: u64,

    /// Print the board before every ply and at the end
    pub show_board: bool,
}

impl SessionConfig {
    /// No delay and no board output; for batch play
    pub fn quiet() -> Self {
        Self {
            computer_delay_ms: 0,
            show_board: false,
        }
    }

    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }

    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: 1000,
            show_board: true,
        }
    }
}

/// Alternates two agents until the game ends
#[derive(Debug, Clone, Default)]
pub struct SessionDriver {
    config: SessionConfig,
}

impl SessionDriver {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play a full game from the empty board
    pub fn run(&self, x: &mut dyn Agent, o: &mut dyn Agent, out: &mut dyn Write) -> Result<Game> {
        self.play_out(GameSession::new(), x, o, out)
    }

    /// Play from `session` to the end, writing the board and the final
    /// announcement to `out`. Returns the transcript of the moves made.
    pub fn play_out(
        &self,
        mut session: GameSession,
        x: &mut dyn Agent,
        o: &mut dyn Agent,
        out: &mut dyn Write,
    ) -> Result<Game> {
        let mut game = Game::from_board(*session.board());

        loop {
            if self.config.show_board {
                writeln!(out, "{}\n", session.board().render())
                    .map_err(|e| Error::io("print board", e))?;
            }

            let player = match session.phase() {
                Phase::Finished(outcome) => {
                    writeln!(out, "{}", outcome.message())
                        .map_err(|e| Error::io("print outcome", e))?;
                    return Ok(game);
                }
                Phase::AwaitingMove(player) => player,
            };

            let agent: &mut dyn Agent = match player {
                Player::X => &mut *x,
                Player::O => &mut *o,
            };

            let computed = agent.kind() == AgentKind::Computed;
            let delay = self.config.computer_delay();
            if computed && !delay.is_zero() {
                thread::sleep(delay);
            }

            let mv = agent.select_move(session.board(), player)?;
            if computed && self.config.show_board {
                writeln!(out, "{} ({player}) plays {mv}", agent.name())
                    .map_err(|e| Error::io("print move", e))?;
            }

            session = session.accept(mv)?;
            game.play(mv, player)?;
        }
    }
}
