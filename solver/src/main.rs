use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use stevedore::{Board, SolverOptions};

/// Find a pusher move sequence that puts every box on a goal square.
///
/// Prints the move string (lowercase u/d/l/r) on stdout, or an empty line
/// when the puzzle has no solution or the deadline elapsed first.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a puzzle in standard Sokoban text notation.
    puzzle: PathBuf,

    /// Wall-clock budget in seconds; exceeding it prints an empty line
    /// rather than an error.
    #[arg(long)]
    timeout: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.puzzle)
        .with_context(|| format!("failed to read {}", args.puzzle.display()))?;
    let board = text.parse::<Board>().context("malformed puzzle")?;

    let options = SolverOptions {
        timeout: args.timeout.map(Duration::from_secs),
    };

    println!("{}", board.solve(&options).moves());
    Ok(())
}
