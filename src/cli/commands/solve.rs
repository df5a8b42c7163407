//! Evaluate a position and report the optimal move

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::{board::Board, rules, search};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Board as nine cells in row-major order ('X', 'O', '.' for empty);
    /// the side to move is inferred from the piece counts
    pub board: String,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let mut out = io::stdout();
    run(args, &mut out)
}

fn run<W: Write>(args: SolveArgs, out: &mut W) -> Result<()> {
    let (mut board, to_move) = Board::from_string(&args.board)?;

    // A finished game has no move to recommend; both output formats report
    // the winner instead of searching.
    if let Some(winner) = rules::winner(&board) {
        if args.json {
            let rendered = serde_json::json!({ "winner": winner });
            writeln!(out, "{rendered}")?;
        } else {
            write!(out, "{board}")?;
            writeln!(out, "game over: {winner} has already won")?;
        }
        return Ok(());
    }

    let result = search::best_move_for(&mut board, to_move);

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&result).context("serialize search result")?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }

    write!(out, "{board}")?;
    match result.best {
        Some(coord) => writeln!(
            out,
            "{to_move} to move: best move {coord} (value {})",
            result.value
        )?,
        None => writeln!(out, "no moves available: the board is full (draw)")?,
    }

    Ok(())
}
