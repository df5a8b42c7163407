//! Tic-Tac-Toe CLI - play against an optimal computer opponent or evaluate
//! positions with the exhaustive alpha-beta search.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tactix")]
#[command(version, about = "Optimal-play Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (human vs. computer or computer vs. computer)
    Play(tactix::cli::commands::play::PlayArgs),

    /// Compute the optimal move for a board position
    Solve(tactix::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tactix::cli::commands::play::execute(args),
        Commands::Solve(args) => tactix::cli::commands::solve::execute(args),
    }
}
