//! Game session orchestration
//!
//! Owns the authoritative board for a session, alternates between two move
//! sources starting with X, and reports the outcome. All rendering goes to
//! the supplied writer so sessions run headless in tests.

use std::{io::Write, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Board, Player},
    players::MoveSource,
    rules,
};

/// Selected game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    HumanVsComputer,
    ComputerVsComputer,
}

impl FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Mode::HumanVsComputer),
            "2" => Ok(Mode::ComputerVsComputer),
            other => Err(crate::Error::InvalidMode {
                input: other.to_string(),
            }),
        }
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Play a single game from the empty board.
///
/// `x_source` moves first. After each applied move the board is rendered to
/// `out` and checked for termination; the winner is determined with win
/// checks before the draw check.
///
/// # Errors
///
/// Returns an error if a source fails to produce a move or if writing to
/// `out` fails. Sources are responsible for returning only legal moves; a
/// source that returns an occupied cell surfaces as
/// [`crate::Error::InvalidMove`].
pub fn play_game<W: Write>(
    x_source: &mut dyn MoveSource,
    o_source: &mut dyn MoveSource,
    out: &mut W,
) -> Result<GameOutcome> {
    let mut board = Board::new();
    let mut to_move = Player::X;

    writeln!(out, "{board}")?;

    while !rules::is_terminal(&board) {
        let source: &mut dyn MoveSource = match to_move {
            Player::X => x_source,
            Player::O => o_source,
        };
        writeln!(out, "{to_move}'s turn ({}):", source.name())?;
        let coord = source.select_move(&board, to_move)?;
        board.place(coord, to_move)?;
        writeln!(out, "{board}")?;
        to_move = to_move.opponent();
    }

    Ok(match rules::winner(&board) {
        Some(player) => GameOutcome::Win(player),
        None => GameOutcome::Draw,
    })
}
