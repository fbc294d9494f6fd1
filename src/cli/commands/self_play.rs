//! Self-play command - run the engine through a series of games

use std::{fs::File, io, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::{ComputedAgent, RandomAgent},
    cli::output,
    ports::Agent,
    session::{SessionConfig, SessionDriver},
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against itself or a random opponent")]
pub struct SelfPlayArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Opponent (`engine` or `random`)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Opponent faced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Engine,
    Random,
}

impl OpponentKind {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "engine" | "optimal" => Ok(OpponentKind::Engine),
            "random" => Ok(OpponentKind::Random),
            other => Err(anyhow!(
                "Invalid opponent '{other}' (expected 'engine' or 'random')"
            )),
        }
    }

    fn agent(self, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (OpponentKind::Engine, _) => Box::new(ComputedAgent::new("Opponent")),
            (OpponentKind::Random, Some(seed)) => Box::new(RandomAgent::with_seed("Random", seed)),
            (OpponentKind::Random, None) => Box::new(RandomAgent::new("Random")),
        }
    }
}

/// Results of a series, counted from the engine's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub opponent: OpponentKind,
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl SeriesSummary {
    pub fn new(opponent: OpponentKind, wins: usize, draws: usize, losses: usize) -> Self {
        let total_games = wins + draws + losses;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            opponent,
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }
}

/// Play `games` games. The engine takes X in even-numbered games and O in
/// odd-numbered ones.
pub fn run_series(
    games: usize,
    opponent: OpponentKind,
    seed: Option<u64>,
    progress: Option<&ProgressBar>,
) -> crate::Result<SeriesSummary> {
    let driver = SessionDriver::new(SessionConfig::quiet());
    let mut engine = ComputedAgent::new("Engine");
    let mut other = opponent.agent(seed);
    let mut sink = io::sink();

    let (mut wins, mut draws, mut losses) = (0, 0, 0);
    for game_num in 0..games {
        let engine_side = if game_num.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        };

        let game = match engine_side {
            Player::X => driver.run(&mut engine, other.as_mut(), &mut sink)?,
            Player::O => driver.run(other.as_mut(), &mut engine, &mut sink)?,
        };

        match game.outcome {
            Some(GameOutcome::Win(winner)) if winner == engine_side => wins += 1,
            Some(GameOutcome::Win(_)) => losses += 1,
            _ => draws += 1,
        }

        if let Some(pb) = progress {
            pb.inc(1);
            pb.set_message(format!("W {wins} / D {draws} / L {losses}"));
        }
    }

    Ok(SeriesSummary::new(opponent, wins, draws, losses))
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let opponent = OpponentKind::parse(&args.opponent)?;

    let pb = output::create_game_progress(args.games as u64)?;
    let summary = run_series(args.games, opponent, args.seed, Some(&pb))?;
    pb.finish_and_clear();

    output::print_section(&format!("Engine vs {}", args.opponent));
    let total = summary.total_games.to_string();
    let wins = format!("{} ({:.1}%)", summary.wins, summary.win_rate * 100.0);
    let draws = format!("{} ({:.1}%)", summary.draws, summary.draw_rate * 100.0);
    let losses = format!("{} ({:.1}%)", summary.losses, summary.loss_rate * 100.0);
    output::print_stats_table(&[
        ("Games", total.as_str()),
        ("Wins", wins.as_str()),
        ("Draws", draws.as_str()),
        ("Losses", losses.as_str()),
    ]);

    if summary.losses > 0 {
        eprintln!("Warning: the engine lost {} game(s).", summary.losses);
    }

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\nSummary exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_against_itself_always_draws() {
        let summary = run_series(2, OpponentKind::Engine, None, None).unwrap();
        assert_eq!(summary.total_games, 2);
        assert_eq!(summary.draws, 2);
        assert_eq!(summary.draw_rate, 1.0);
    }

    #[test]
    fn opponent_names() {
        assert_eq!(OpponentKind::parse("Random").unwrap(), OpponentKind::Random);
        assert_eq!(OpponentKind::parse("optimal").unwrap(), OpponentKind::Engine);
        assert!(OpponentKind::parse("menace").is_err());
    }

    #[test]
    fn empty_series_has_zero_rates() {
        let summary = SeriesSummary::new(OpponentKind::Random, 0, 0, 0);
        assert_eq!(summary.win_rate, 0.0);
        assert_eq!(summary.total_games, 0);
    }
}
