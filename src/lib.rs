//! TUI Minesweeper (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_minesweeper::{core,input,term,types}`
//! and hosts the pieces that tie them together: command-line configuration
//! ([`cli`]) and the polling game loop ([`session`]).

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_input as input;
pub use tui_minesweeper_term as term;
pub use tui_minesweeper_types as types;

pub mod cli;
pub mod session;
