//! Command-line interface
//!
//! Argument structs and execution for the `tactix` binary: an interactive
//! `play` session and a `solve` command that evaluates a position.

pub mod commands;
