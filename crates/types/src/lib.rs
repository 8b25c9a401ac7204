//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable from the board
//! engine, the terminal view and the session loop alike.
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, col)`, 0-indexed from the top-left corner.
//! Coordinates are signed ([`Coord`]) so that neighbour arithmetic never wraps:
//! a query one step outside the grid is simply out of range.
//!
//! # Presets
//!
//! | Preset | Rows | Cols | Mines |
//! |--------|------|------|-------|
//! | Beginner (default) | 8 | 8 | 10 |
//! | Intermediate | 16 | 16 | 40 |
//! | Expert | 16 | 30 | 99 |
//!
//! # Examples
//!
//! ```
//! use tui_minesweeper_types::{BoardConfig, GameAction, Outcome, Preset, Status};
//!
//! let config = Preset::Expert.config();
//! assert_eq!((config.height(), config.width(), config.mines()), (16, 30, 99));
//!
//! let custom: BoardConfig = "9x9x10".parse().unwrap();
//! assert_eq!(custom.safe_cells(), 71);
//!
//! assert_eq!(GameAction::ToggleFlag.cursor_delta(), None);
//! assert_eq!(Status::from(Outcome::Lost).as_str(), "Lose");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Signed grid coordinate (row or column).
pub type Coord = i16;

/// Input poll timeout in milliseconds.
///
/// The session loop redraws at least this often so the elapsed-time readout
/// keeps moving without input.
pub const POLL_TIMEOUT_MS: u64 = 1000;

/// Ground-truth content of a cell, fixed when the board is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellValue {
    Mine,
    /// Number of mines among the (up to) 8 neighbours, in `0..=8`.
    Count(u8),
}

impl CellValue {
    pub fn is_mine(&self) -> bool {
        matches!(self, CellValue::Mine)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Count(0)
    }
}

/// Player-facing state of a cell.
///
/// Legal transitions are `Hidden <-> Flagged` and `Hidden | Flagged -> Revealed`.
/// `Revealed` is terminal for the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// Game outcome. Anything other than `Playing` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
    Aborted,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

/// Status label shown in the score panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Win,
    Lose,
    Aborted,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Playing => "Playing",
            Status::Win => "Win",
            Status::Lose => "Lose",
            Status::Aborted => "Aborted",
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Lost => Status::Lose,
            Outcome::Won => Status::Win,
            Outcome::Aborted => Status::Aborted,
            Outcome::Playing => Status::Playing,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game actions that can be applied to the board
///
/// Each action maps to exactly one board engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Move the cursor one column left
    MoveLeft,
    /// Move the cursor one column right
    MoveRight,
    /// Reveal the cell under the cursor
    Reveal,
    /// Toggle a flag on the cell under the cursor
    ToggleFlag,
    /// Abort the game
    Quit,
}

impl GameAction {
    /// Name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Reveal => "reveal",
            GameAction::ToggleFlag => "toggleFlag",
            GameAction::Quit => "quit",
        }
    }

    /// Cursor delta `(d_row, d_col)` for movement actions.
    pub fn cursor_delta(&self) -> Option<(Coord, Coord)> {
        match self {
            GameAction::MoveUp => Some((-1, 0)),
            GameAction::MoveDown => Some((1, 0)),
            GameAction::MoveLeft => Some((0, -1)),
            GameAction::MoveRight => Some((0, 1)),
            _ => None,
        }
    }
}

/// Named board sizes selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Beginner, Preset::Intermediate, Preset::Expert];

    pub fn config(&self) -> BoardConfig {
        let (height, width, mines) = match self {
            Preset::Beginner => (8, 8, 10),
            Preset::Intermediate => (16, 16, 40),
            Preset::Expert => (16, 30, 99),
        };
        BoardConfig {
            height,
            width,
            mines,
        }
    }
}

/// Configuration rejected before any board is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {height}x{width}")]
    ZeroDimension { height: u8, width: u8 },
    #[error("{mines} mines do not fit a {height}x{width} board (at most {} allowed)", .cells - 1)]
    TooManyMines {
        height: u8,
        width: u8,
        mines: u32,
        cells: u32,
    },
    #[error("mine at ({row}, {col}) is outside the board")]
    MinesOutOfRange { row: Coord, col: Coord },
    #[error("mine at ({row}, {col}) listed more than once")]
    DuplicateMine { row: Coord, col: Coord },
    #[error("malformed board spec {0:?}, expected ROWSxCOLSxMINES (e.g. 9x9x10)")]
    Malformed(String),
}

/// Validated board dimensions and mine count.
///
/// Construction guarantees `height > 0`, `width > 0` and
/// `mines < height * width`, so at least one cell is always safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    height: u8,
    width: u8,
    mines: u32,
}

impl BoardConfig {
    pub fn new(height: u8, width: u8, mines: u32) -> Result<Self, ConfigError> {
        if height == 0 || width == 0 {
            return Err(ConfigError::ZeroDimension { height, width });
        }
        let cells = height as u32 * width as u32;
        if mines >= cells {
            return Err(ConfigError::TooManyMines {
                height,
                width,
                mines,
                cells,
            });
        }
        Ok(Self {
            height,
            width,
            mines,
        })
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn mines(&self) -> u32 {
        self.mines
    }

    pub fn cell_count(&self) -> u32 {
        self.height as u32 * self.width as u32
    }

    /// Number of cells that must be revealed to win.
    pub fn safe_cells(&self) -> u32 {
        self.cell_count() - self.mines
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl From<Preset> for BoardConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

impl FromStr for BoardConfig {
    type Err = ConfigError;

    /// Parse `ROWSxCOLSxMINES`, e.g. `16x30x99`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::Malformed(s.to_string());
        let mut parts = s.trim().split(['x', 'X']);
        let height = parts
            .next()
            .and_then(|p| p.trim().parse::<u8>().ok())
            .ok_or_else(malformed)?;
        let width = parts
            .next()
            .and_then(|p| p.trim().parse::<u8>().ok())
            .ok_or_else(malformed)?;
        let mines = parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }
        BoardConfig::new(height, width, mines)
    }
}

impl fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_sizes() {
        let sizes: Vec<_> = Preset::ALL
            .iter()
            .map(|p| {
                let c = p.config();
                (c.height(), c.width(), c.mines())
            })
            .collect();
        assert_eq!(sizes, vec![(8, 8, 10), (16, 16, 40), (16, 30, 99)]);
        assert_eq!(BoardConfig::default(), Preset::Beginner.config());
    }

    #[test]
    fn config_rejects_impossible_boards() {
        assert_eq!(
            BoardConfig::new(0, 5, 1),
            Err(ConfigError::ZeroDimension {
                height: 0,
                width: 5
            })
        );
        assert!(matches!(
            BoardConfig::new(3, 3, 9),
            Err(ConfigError::TooManyMines { cells: 9, .. })
        ));
        assert!(BoardConfig::new(3, 3, 8).is_ok());
        assert!(BoardConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn config_parses_rows_cols_mines() {
        let c: BoardConfig = "16x30x99".parse().unwrap();
        assert_eq!(c, Preset::Expert.config());
        assert_eq!(c.to_string(), "16x30x99");

        assert!(matches!(
            "16x30".parse::<BoardConfig>(),
            Err(ConfigError::Malformed(_))
        ));
        assert!(matches!(
            "1x2x3x4".parse::<BoardConfig>(),
            Err(ConfigError::Malformed(_))
        ));
        assert!(matches!(
            "300x2x1".parse::<BoardConfig>(),
            Err(ConfigError::Malformed(_))
        ));
        assert!(matches!(
            "2x2x4".parse::<BoardConfig>(),
            Err(ConfigError::TooManyMines { .. })
        ));
    }

    #[test]
    fn status_labels_follow_outcome() {
        assert_eq!(Status::from(Outcome::Playing).as_str(), "Playing");
        assert_eq!(Status::from(Outcome::Won).as_str(), "Win");
        assert_eq!(Status::from(Outcome::Lost).as_str(), "Lose");
        assert_eq!(Status::from(Outcome::Aborted).as_str(), "Aborted");
        assert!(!Outcome::Playing.is_terminal());
        assert!(Outcome::Aborted.is_terminal());
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Reveal,
            GameAction::ToggleFlag,
            GameAction::Quit,
        ] {
            assert!(!action.as_str().is_empty());
            assert_eq!(action.cursor_delta().is_some(), action.as_str().starts_with("move"));
        }
        assert_eq!(GameAction::MoveUp.cursor_delta(), Some((-1, 0)));
        assert_eq!(GameAction::Reveal.cursor_delta(), None);
    }
}
