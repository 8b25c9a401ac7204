//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and defines the
//! [`ActionSource`] seam the session loop polls, with a crossterm-backed
//! implementation and a scripted one for tests.

pub mod map;
pub mod source;

pub use tui_minesweeper_types as types;

pub use map::handle_key_event;
pub use source::{ActionSource, ScriptedSource, TerminalSource};
