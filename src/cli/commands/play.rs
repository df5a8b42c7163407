//! Interactive game session

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use crate::{
    game::{self, GameOutcome, Mode},
    players::{Engine, HumanConsole},
};

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Game mode: 1 = human vs. computer, 2 = computer vs. computer.
    /// Prompts interactively when omitted.
    #[arg(long)]
    pub mode: Option<String>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mode = match args.mode {
        Some(choice) => choice.parse::<Mode>()?,
        None => prompt_mode()?,
    };

    let mut out = io::stdout();
    writeln!(out, "Welcome to Tic-Tac-Toe!")?;

    let outcome = match mode {
        Mode::HumanVsComputer => {
            let mut human = HumanConsole::stdio();
            let mut engine = Engine;
            game::play_game(&mut human, &mut engine, &mut out)?
        }
        Mode::ComputerVsComputer => {
            let mut engine_x = Engine;
            let mut engine_o = Engine;
            game::play_game(&mut engine_x, &mut engine_o, &mut out)?
        }
    };

    match outcome {
        GameOutcome::Win(player) => writeln!(out, "{player} wins!")?,
        GameOutcome::Draw => writeln!(out, "It's a draw!")?,
    }

    Ok(())
}

fn prompt_mode() -> Result<Mode> {
    let mut out = io::stdout();
    write!(
        out,
        "Select game mode (1: Human vs. Computer, 2: Computer vs. Computer): "
    )?;
    out.flush()?;

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;
    // Anything other than "1" or "2" terminates the session
    Ok(choice.parse::<Mode>()?)
}
