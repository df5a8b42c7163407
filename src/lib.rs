//! Optimal-play Tic-Tac-Toe engine
//!
//! This crate provides:
//! - A 3x3 board representation with validated coordinates and text parsing
//! - Pure win/draw/termination rules
//! - Exhaustive minimax search with alpha-beta pruning for optimal play
//! - Move sources (engine and console input) behind a common trait
//! - A game loop and CLI for interactive and engine-vs-engine sessions
//!
//! The search explores at most 9 plies, so a plain depth-first traversal
//! with pruning solves any position exactly; there is no caching and no
//! randomness anywhere in the engine.

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod players;
pub mod rules;
pub mod search;

pub use board::{Board, Cell, Coord, Player};
pub use error::{Error, Result};
pub use game::{GameOutcome, Mode, play_game};
pub use players::{Engine, HumanConsole, MoveSource};
pub use search::{Score, SearchResult, best_move_for, find_best_move, minimax};
