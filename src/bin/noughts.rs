//! noughts CLI - play, solve and benchmark 3x3 tic-tac-toe
//!
//! This CLI provides:
//! - A console game against the alpha-beta engine
//! - Analysis of a single position
//! - Batch self-play against the engine or a random opponent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Exact tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine
    Play(noughts::cli::commands::play::PlayArgs),

    /// Solve a position and list move values
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Run a series of engine games
    SelfPlay(noughts::cli::commands::self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::SelfPlay(args) => noughts::cli::commands::self_play::execute(args),
    }
}
