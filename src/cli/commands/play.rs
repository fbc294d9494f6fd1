//! Play command - a console game against the engine

use std::{io, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_seat;
use crate::{
    adapters::{ComputedAgent, InteractiveAgent},
    cli::{config::PlayConfig, output},
    ports::Agent,
    session::SessionDriver,
    tictactoe::{Game, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the engine")]
pub struct PlayArgs {
    /// Side you play (`x`, `o`, or `none` to watch the engine play itself)
    #[arg(long)]
    pub human: Option<String>,

    /// Pause before each engine move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// JSON config file (flags override its values)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print search statistics at the end of the game
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Resolve the effective configuration from file and flags
pub fn resolve_config(args: &PlayArgs) -> Result<PlayConfig> {
    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlayConfig::default(),
    };

    if let Some(human) = &args.human {
        config.human = parse_seat(human, "--human")?;
    }
    if let Some(delay) = args.delay_ms {
        config.session = config
            .session
            .with_computer_delay(Duration::from_millis(delay));
    }
    config.verbose |= args.verbose;

    Ok(config)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let driver = SessionDriver::new(config.session.clone());
    let mut out = io::stdout();

    let mut engine = ComputedAgent::new("Computer");
    let game = match config.human {
        Some(Player::X) => {
            let mut human = InteractiveAgent::stdio("Human");
            driver.run(&mut human, &mut engine, &mut out)?
        }
        Some(Player::O) => {
            let mut human = InteractiveAgent::stdio("Human");
            driver.run(&mut engine, &mut human, &mut out)?
        }
        None => {
            let mut other = ComputedAgent::new("Computer O");
            let game = driver.run(&mut engine, &mut other, &mut out)?;
            if config.verbose {
                report_search(&other);
            }
            game
        }
    };

    if config.verbose {
        report_search(&engine);
        report_game(&game);
    }

    Ok(())
}

fn report_search(agent: &ComputedAgent) {
    let stats = agent.total_stats();
    let nodes = output::format_number(stats.nodes);
    let terminal = output::format_number(stats.terminal_nodes);
    let cutoffs = output::format_number(stats.cutoffs);
    output::print_subsection(&format!("Search statistics: {}", agent.name()));
    output::print_stats_table(&[
        ("Nodes", nodes.as_str()),
        ("Terminal nodes", terminal.as_str()),
        ("Cutoffs", cutoffs.as_str()),
    ]);
}

fn report_game(game: &Game) {
    let moves: Vec<String> = game
        .moves
        .iter()
        .map(|placed| format!("{}{}", placed.player, placed.mv))
        .collect();
    output::print_kv("Moves", &moves.join(" "));
}
