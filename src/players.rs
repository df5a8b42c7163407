//! Move sources - the engine and interactive console input
//!
//! The orchestration loop in [`crate::game`] only talks to this trait, so
//! the decision logic has no dependency on console I/O and whole games can
//! run headless in tests.

use std::io::{self, BufRead, Write};

use crate::{
    Result,
    board::{Board, Coord, Player},
    search,
};

/// A source of moves for one side of the game.
///
/// Implementations must only return coordinates naming an empty cell; the
/// console adapter re-prompts until it has one, and the engine searches only
/// legal placements.
pub trait MoveSource {
    /// Select a move for `side` on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (no empty cell, or the
    /// input stream is closed).
    fn select_move(&mut self, board: &Board, side: Player) -> Result<Coord>;

    /// Name used when announcing turns.
    fn name(&self) -> &str;
}

/// The optimal-play computer opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl MoveSource for Engine {
    fn select_move(&mut self, board: &Board, side: Player) -> Result<Coord> {
        // Search on a scratch copy; the caller's board is never touched.
        let mut scratch = *board;
        search::best_move_for(&mut scratch, side)
            .best
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "computer"
    }
}

/// Interactive move input: prompts for a row and a column and re-prompts on
/// malformed or illegal input instead of surfacing an error.
///
/// Generic over the reader and writer so tests can drive it with in-memory
/// buffers; use [`HumanConsole::stdio`] for the real console.
pub struct HumanConsole<R, W> {
    input: R,
    output: W,
}

impl<R, W> HumanConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanConsole { input, output }
    }
}

impl HumanConsole<io::BufReader<io::Stdin>, io::Stdout> {
    /// Console input reading from stdin and prompting on stdout
    pub fn stdio() -> Self {
        HumanConsole::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanConsole<R, W> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|source| crate::Error::Io {
                operation: "read move input".to_string(),
                source,
            })?;
        if bytes == 0 {
            return Err(crate::Error::Io {
                operation: "read move input".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        Ok(line)
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.output, "Enter your move (row and column): ").map_err(|source| {
            crate::Error::Io {
                operation: "write prompt".to_string(),
                source,
            }
        })?;
        self.output.flush().map_err(|source| crate::Error::Io {
            operation: "flush prompt".to_string(),
            source,
        })
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|source| crate::Error::Io {
            operation: "write message".to_string(),
            source,
        })
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanConsole<R, W> {
    fn select_move(&mut self, board: &Board, _side: Player) -> Result<Coord> {
        loop {
            self.prompt()?;
            let line = self.read_line()?;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let parsed = match tokens.as_slice() {
                [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
                    (Ok(row), Ok(col)) => Some((row, col)),
                    _ => None,
                },
                _ => None,
            };

            let Some((row, col)) = parsed else {
                self.complain("Invalid input. Enter two numbers separated by a space.")?;
                continue;
            };

            match Coord::new(row, col) {
                Ok(coord) if board.is_empty(coord) => return Ok(coord),
                _ => self.complain("Invalid move. Try again.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
