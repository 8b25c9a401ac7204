//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Minesweeper board engine: grid storage, mine
//! placement, adjacency counts, flood reveal, flags, and win/loss/timing state.
//! It has **zero dependencies** on terminal, input, or rendering code, making it:
//!
//! - **Deterministic**: the engine owns its RNG, so the same seed produces the
//!   same layouts (including first-reveal re-rolls)
//! - **Testable**: every rule is reachable through the public operations
//! - **Portable**: the terminal front end only reads [`BoardSnapshot`]s
//!
//! # Module Structure
//!
//! - [`grid`]: bounds-checked row-major 2D storage with 8-neighbourhood lookup
//! - [`placement`]: uniform mine placement and adjacency counts
//! - [`board`]: the [`Board`] engine (cursor, flags, reveal, outcome, clock)
//! - [`snapshot`]: render-ready copies of the board
//!
//! # Game Rules
//!
//! - **First reveal is safe**: if the first reveal of a game lands on a mine,
//!   the layout is regenerated until it does not
//! - **Flood reveal**: revealing a cell with no adjacent mines also reveals its
//!   neighbours, recursively across the connected zero region and its border
//! - **Flags** block reveals, including flood reveals, and never cap at the
//!   mine count
//! - **Win** when every non-mine cell is revealed, **lose** on revealing a mine
//! - **Clock** starts at the first reveal and reads 0 until then
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::Board;
//! use tui_minesweeper_types::{Outcome, Visibility};
//!
//! // A 3x3 board with one mine in the corner.
//! let mut board = Board::from_mines(3, 3, &[(2, 2)], 1).unwrap();
//!
//! // (0,0) has no adjacent mines, so one reveal floods every safe cell.
//! board.reveal();
//! assert_eq!(board.revealed_count(), 8);
//! assert_eq!(board.outcome(), Outcome::Won);
//! assert_eq!(board.visibility(2, 2), Some(Visibility::Hidden));
//! ```

pub mod board;
pub mod grid;
pub mod placement;
pub mod snapshot;

pub use tui_minesweeper_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use grid::Grid;
pub use snapshot::{BoardSnapshot, CellSnapshot};
