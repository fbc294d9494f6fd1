//! Analyze command - solve a single position
//!
//! Reports the minimax value, the move the engine would play, the value of
//! every alternative, and how many positions the pruned search visited.

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use super::parse_player_token;
use crate::{
    cli::output,
    search::{AlphaBeta, Minimax, SearchStats},
    tictactoe::{Board, GameOutcome, Move, Player, format_board},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a position and show the value of each move")]
pub struct AnalyzeArgs {
    /// Board to analyze, e.g. "XX./OO./..." (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,

    /// Side to move (`x` or `o`); inferred from piece counts when omitted
    #[arg(long)]
    pub player: Option<String>,

    /// Also run unpruned minimax and report its node count
    #[arg(long)]
    pub compare: bool,

    /// Write the report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Value of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveValue {
    pub mv: Move,
    pub value: i32,
}

/// Everything `analyze` prints, in exportable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub board: String,
    pub player: Player,
    pub outcome: Option<GameOutcome>,
    pub value: i32,
    pub best_move: Option<Move>,
    pub moves: Vec<MoveValue>,
    pub alpha_beta: SearchStats,
    pub minimax: Option<SearchStats>,
}

/// Solve `board` with `player` to move.
///
/// On a finished board the report carries the outcome and utility and no
/// moves.
pub fn analyze_position(
    board: &Board,
    player: Player,
    compare: bool,
) -> crate::Result<AnalysisReport> {
    if board.is_terminal() {
        return Ok(AnalysisReport {
            board: format_board(board),
            player,
            outcome: Some(GameOutcome::of(board)?),
            value: board.utility()?,
            best_move: None,
            moves: Vec::new(),
            alpha_beta: SearchStats::default(),
            minimax: None,
        });
    }

    let mut search = AlphaBeta::new();
    let decision = search.best_decision(board, player)?;
    let alpha_beta = search.stats();

    let moves = AlphaBeta::new()
        .evaluate_moves(board, player)?
        .into_iter()
        .map(|(mv, value)| MoveValue { mv, value })
        .collect();

    let minimax = if compare {
        let mut reference = Minimax::new();
        reference.best_decision(board, player)?;
        Some(reference.stats())
    } else {
        None
    };

    Ok(AnalysisReport {
        board: format_board(board),
        player,
        outcome: None,
        value: decision.map_or(0, |d| d.value),
        best_move: decision.map(|d| d.mv),
        moves,
        alpha_beta,
        minimax,
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(text) => Board::from_string(text).with_context(|| format!("Invalid board '{text}'"))?,
        None => Board::new(),
    };
    let player = match &args.player {
        Some(token) => parse_player_token(token, "--player")?,
        None => board.to_move()?,
    };

    let spinner = output::create_spinner("Searching...")?;
    let report = analyze_position(&board, player, args.compare)?;
    spinner.finish_and_clear();

    print_report(&board, &report);

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nReport exported to: {}", path.display());
    }

    Ok(())
}

fn print_report(board: &Board, report: &AnalysisReport) {
    output::print_section(&format!("Position ({} to move)", report.player));
    println!("{}", board.render());

    if let Some(outcome) = report.outcome {
        println!();
        output::print_kv("Outcome", outcome.message());
        return;
    }

    output::print_subsection("Engine choice");
    output::print_kv("Value", output::describe_value(report.value));
    if let Some(mv) = report.best_move {
        output::print_kv("Best move", &mv.to_string());
    }

    output::print_subsection("Move values");
    for candidate in &report.moves {
        let marker = if Some(candidate.mv) == report.best_move {
            " <"
        } else {
            ""
        };
        println!(
            "  {:10} {}{marker}",
            candidate.mv.to_string(),
            output::describe_value(candidate.value)
        );
    }

    output::print_subsection("Search effort");
    output::print_kv("Alpha-beta nodes", &output::format_number(report.alpha_beta.nodes));
    output::print_kv("Cutoffs", &output::format_number(report.alpha_beta.cutoffs));
    if let Some(minimax) = report.minimax {
        output::print_kv("Minimax nodes", &output::format_number(minimax.nodes));
        if minimax.nodes > 0 {
            let saved = 100.0 * (1.0 - report.alpha_beta.nodes as f64 / minimax.nodes as f64);
            output::print_kv("Pruned", &format!("{saved:.1}%"));
        }
    }
}
