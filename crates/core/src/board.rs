//! Board module - the Minesweeper game engine
//!
//! A [`Board`] owns two parallel grids of identical size:
//!
//! - the ground truth ([`CellValue`]): mines and adjacency counts, fixed by
//!   [`Board::initialize`]
//! - the player's view ([`Visibility`]): hidden, flagged or revealed
//!
//! plus the counters, cursor, outcome and clock that make up a game. All
//! mutation goes through a handful of operations (cursor movement, flag
//! toggle, reveal, quit). Once the outcome is terminal the board only answers
//! queries.
//!
//! The engine owns its random number generator, seeded once at construction,
//! so a given seed always produces the same sequence of layouts.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::grid::Grid;
use crate::placement;
use crate::snapshot::{BoardSnapshot, CellSnapshot};
use crate::types::{
    BoardConfig, CellValue, ConfigError, Coord, GameAction, Outcome, Status, Visibility,
};

/// Complete game state for one Minesweeper session
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    truth: Grid<CellValue>,
    visibility: Grid<Visibility>,
    /// Number of `Revealed` cells, maintained incrementally.
    revealed: u32,
    /// Informational only: not capped at the mine count.
    flags: u32,
    cursor: (Coord, Coord),
    outcome: Outcome,
    started_at: Instant,
    /// Set when the game reaches a terminal outcome; stops the clock.
    ended_at: Option<Instant>,
    rng: StdRng,
    seed: u64,
    /// Number of times the mine layout has been generated (re-rolls included).
    generation: u32,
}

impl Board {
    /// Create a board for `config` and generate its first layout from `seed`
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut board = Self::empty(config, seed);
        board.initialize();
        board
    }

    /// Create a board with a fixed mine layout.
    ///
    /// The layout is used as-is for the first game; later re-initialisations
    /// (including the first-reveal re-roll) draw random layouts from `seed`.
    pub fn from_mines(
        height: u8,
        width: u8,
        mines: &[(Coord, Coord)],
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let config = BoardConfig::new(height, width, mines.len() as u32)?;
        let mut board = Self::empty(config, seed);

        for &(row, col) in mines {
            match board.truth.get(row, col) {
                None => return Err(ConfigError::MinesOutOfRange { row, col }),
                Some(CellValue::Mine) => return Err(ConfigError::DuplicateMine { row, col }),
                Some(_) => {
                    board.truth.set(row, col, CellValue::Mine);
                }
            }
        }
        placement::fill_counts(&mut board.truth);
        board.generation = 1;
        debug!(%config, "board created from fixed layout");
        Ok(board)
    }

    fn empty(config: BoardConfig, seed: u64) -> Self {
        Self {
            config,
            truth: Grid::new(config.height(), config.width()),
            visibility: Grid::new(config.height(), config.width()),
            revealed: 0,
            flags: 0,
            cursor: (0, 0),
            outcome: Outcome::Playing,
            started_at: Instant::now(),
            ended_at: None,
            rng: StdRng::seed_from_u64(seed),
            seed,
            generation: 0,
        }
    }

    /// Reset all mutable state and generate a fresh mine layout.
    ///
    /// Counters, outcome and clock are reset; the cursor keeps its position so
    /// the first-reveal re-roll can check the same cell again.
    pub fn initialize(&mut self) {
        self.revealed = 0;
        self.flags = 0;
        self.outcome = Outcome::Playing;
        self.ended_at = None;
        self.visibility.fill(Visibility::Hidden);
        placement::generate(&mut self.rng, &mut self.truth, self.config.mines());
        self.started_at = Instant::now();
        self.generation += 1;
        debug!(
            config = %self.config,
            generation = self.generation,
            "board initialized"
        );
    }

    /// Apply one input action. Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reveal => self.reveal(),
            GameAction::ToggleFlag => self.toggle_flag(),
            GameAction::Quit => self.quit(),
            GameAction::MoveUp
            | GameAction::MoveDown
            | GameAction::MoveLeft
            | GameAction::MoveRight => match action.cursor_delta() {
                Some((dr, dc)) => self.move_cursor(dr, dc),
                None => false,
            },
        }
    }

    /// Move the cursor by (d_row, d_col); rejected if the target is off the board.
    pub fn move_cursor(&mut self, d_row: Coord, d_col: Coord) -> bool {
        if self.is_terminal() {
            return false;
        }
        let (row, col) = self.cursor;
        let (Some(new_row), Some(new_col)) = (row.checked_add(d_row), col.checked_add(d_col))
        else {
            return false;
        };
        if !self.truth.contains(new_row, new_col) {
            return false;
        }
        self.cursor = (new_row, new_col);
        true
    }

    /// Toggle a flag on the cursor cell. Revealed cells are left alone.
    pub fn toggle_flag(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        let (row, col) = self.cursor;
        match self.visibility.get(row, col) {
            Some(Visibility::Hidden) => {
                self.visibility.set(row, col, Visibility::Flagged);
                self.flags += 1;
                true
            }
            Some(Visibility::Flagged) => {
                self.visibility.set(row, col, Visibility::Hidden);
                self.flags = self.flags.saturating_sub(1);
                true
            }
            Some(Visibility::Revealed) | None => false,
        }
    }

    /// Reveal the cursor cell, flooding outward from zero-count cells.
    ///
    /// The first reveal of a game never hits a mine: while nothing has been
    /// revealed and the cursor sits on a mine, the layout is regenerated. The
    /// clock restarts at the first reveal so time spent moving around before
    /// it does not count.
    pub fn reveal(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        let (row, col) = self.cursor;

        if self.revealed == 0 {
            let mut rerolls = 0u32;
            while self.truth.get(row, col) == Some(CellValue::Mine) {
                self.initialize();
                rerolls += 1;
            }
            if rerolls > 0 {
                debug!(rerolls, row, col, "first reveal landed on a mine, regenerated");
            }
            self.started_at = Instant::now();
        }

        self.flood_reveal(row, col)
    }

    /// Reveal (row, col) and, through zero-count cells, everything connected to it.
    ///
    /// Uses an explicit worklist instead of recursion. A cell is marked
    /// revealed before its neighbours are queued, and each queued cell is
    /// processed at most once. Flagged cells are never revealed. A mine or a
    /// win ends processing immediately.
    fn flood_reveal(&mut self, row: Coord, col: Coord) -> bool {
        let origin = (row, col);
        let safe_cells = self.config.safe_cells();
        let mut changed = false;
        let mut pending = vec![origin];

        while let Some((r, c)) = pending.pop() {
            if self.is_terminal() {
                break;
            }
            match self.visibility.get(r, c) {
                None | Some(Visibility::Flagged) => continue,
                Some(Visibility::Revealed) if (r, c) != origin => continue,
                Some(Visibility::Revealed) => {}
                Some(Visibility::Hidden) => {
                    self.visibility.set(r, c, Visibility::Revealed);
                    self.revealed += 1;
                    changed = true;
                }
            }

            let Some(value) = self.truth.get(r, c) else {
                continue;
            };
            if value.is_mine() {
                self.finish(Outcome::Lost);
                break;
            }
            if self.revealed >= safe_cells {
                self.finish(Outcome::Won);
                break;
            }
            if value == CellValue::Count(0) {
                for (nr, nc) in self.truth.neighbors(r, c) {
                    if self.visibility.get(nr, nc) != Some(Visibility::Revealed) {
                        pending.push((nr, nc));
                    }
                }
            }
        }

        changed
    }

    /// Abort the game. No-op once the game is over.
    pub fn quit(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.finish(Outcome::Aborted);
        true
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.ended_at = Some(Instant::now());
        info!(
            ?outcome,
            revealed = self.revealed,
            flags = self.flags,
            elapsed_ms = self.elapsed_time(),
            "game over"
        );
    }

    pub fn status(&self) -> Status {
        Status::from(self.outcome)
    }

    /// Milliseconds from the first reveal to now, or to the end of the game
    /// once it is over; 0 until a cell has been revealed.
    pub fn elapsed_time(&self) -> u64 {
        if self.revealed == 0 {
            return 0;
        }
        let end = self.ended_at.unwrap_or_else(Instant::now);
        end.saturating_duration_since(self.started_at).as_millis() as u64
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn height(&self) -> u8 {
        self.config.height()
    }

    pub fn width(&self) -> u8 {
        self.config.width()
    }

    pub fn mines(&self) -> u32 {
        self.config.mines()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn cursor(&self) -> (Coord, Coord) {
        self.cursor
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed
    }

    pub fn flag_count(&self) -> u32 {
        self.flags
    }

    /// Ground truth at (row, col); `None` when out of range.
    pub fn truth(&self, row: Coord, col: Coord) -> Option<CellValue> {
        self.truth.get(row, col)
    }

    /// Player visibility at (row, col); `None` when out of range.
    pub fn visibility(&self, row: Coord, col: Coord) -> Option<Visibility> {
        self.visibility.get(row, col)
    }

    /// Copy the render-relevant state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.height = self.height();
        out.width = self.width();
        out.cells.clear();
        out.cells.extend(
            self.truth
                .as_slice()
                .iter()
                .zip(self.visibility.as_slice())
                .map(|(&value, &visibility)| CellSnapshot { value, visibility }),
        );
        out.cursor = self.cursor;
        out.mines = self.mines();
        out.flags = self.flags;
        out.outcome = self.outcome;
        out.elapsed_ms = self.elapsed_time();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
