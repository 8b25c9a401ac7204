//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal code
//! - Make the per-cell glyph choice a pure, testable function
//! - Only rewrite what changed between frames

pub mod fb;
pub mod game_view;
pub mod glyph;
pub mod renderer;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{BoardView, Viewport, BOARD_TOP};
pub use glyph::{glyph_for, Glyph};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
