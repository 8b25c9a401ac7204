//! BoardView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, key help, the score panel (flags / mines,
//! status, elapsed time), then the bordered minefield and, once the game is
//! over, a one-line result message under it.

use crossterm::style::Color;

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::glyph::glyph_for;
use crate::types::{Coord, Outcome};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HELP: [&str; 4] = [
    "[h] Move Left   [l] Move Right",
    "[j] Move Down   [k] Move Up",
    "[f] Flag Mine   [q] Quit",
    "[space] Reveal",
];

const TITLE_ROW: u16 = 0;
const HELP_ROW: u16 = 2;
const FLAGS_ROW: u16 = 7;
const TIME_ROW: u16 = 8;
/// Row of the minefield's top border.
pub const BOARD_TOP: u16 = 10;
const LEFT: u16 = 1;

/// A lightweight terminal renderer for the Minesweeper board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2 columns per cell compensates for typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Terminal size needed to show the whole board and panel.
    pub fn required_size(&self, snap: &BoardSnapshot) -> Viewport {
        let frame_w = LEFT + (snap.width as u16) * self.cell_w + 2;
        let help_w = LEFT + HELP.iter().map(|l| l.len() as u16).max().unwrap_or(0);
        Viewport::new(
            frame_w.max(help_w) + 1,
            BOARD_TOP + snap.height as u16 + 2 + 2,
        )
    }

    /// Terminal position of the left column of board cell (row, col).
    pub fn cell_origin(&self, row: Coord, col: Coord) -> (u16, u16) {
        (
            LEFT + 1 + (col.max(0) as u16) * self.cell_w,
            BOARD_TOP + 1 + row.max(0) as u16,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        self.draw_header(fb);
        self.draw_score_panel(fb, snap);
        self.draw_field(fb, snap);
        self.draw_result(fb, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer) {
        let title = CellStyle::fg(Color::White).bold();
        let help = CellStyle::fg(Color::Grey);

        fb.put_str(LEFT + 8, TITLE_ROW, "Minesweeper", title);
        for (i, line) in HELP.iter().enumerate() {
            fb.put_str(LEFT, HELP_ROW + i as u16, line, help);
        }
    }

    fn draw_score_panel(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot) {
        let label = CellStyle::fg(Color::White).bold();
        let value = CellStyle::fg(Color::Grey);

        let mut x = fb.put_str(LEFT, FLAGS_ROW, "Flags: ", label);
        x = fb.put_u64(x, FLAGS_ROW, snap.flags as u64, 2, value);
        x = fb.put_str(x, FLAGS_ROW, " / ", value);
        x = fb.put_u64(x, FLAGS_ROW, snap.mines as u64, 2, value);
        x = fb.put_str(x, FLAGS_ROW, "  Status: ", label);
        fb.put_str(x, FLAGS_ROW, snap.status().as_str(), status_style(snap.outcome));

        let x = fb.put_str(LEFT, TIME_ROW, "Time: ", label);
        let x = fb.put_u64(x, TIME_ROW, snap.elapsed_ms, 1, value);
        fb.put_str(x, TIME_ROW, " ms", value);
    }

    fn draw_field(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot) {
        let border = CellStyle::fg(Color::Grey);
        let frame_w = (snap.width as u16) * self.cell_w + 2;
        let frame_h = snap.height as u16 + 2;
        draw_border(fb, LEFT, BOARD_TOP, frame_w, frame_h, border);

        let lost = snap.lost();
        let playing = !snap.outcome.is_terminal();
        for row in 0..snap.height as Coord {
            for col in 0..snap.width as Coord {
                let Some(cell) = snap.cell(row, col) else {
                    continue;
                };
                let is_cursor = snap.is_cursor(row, col);
                let glyph = glyph_for(cell.value, cell.visibility, is_cursor, lost);
                let mut style = glyph.style();
                if is_cursor && playing {
                    style = style.reversed();
                }

                let (px, py) = self.cell_origin(row, col);
                fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
                fb.put_char(px, py, glyph.ch(), style);
            }
        }
    }

    fn draw_result(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot) {
        let text = match snap.outcome {
            Outcome::Playing => return,
            Outcome::Won => "You win! Press any key to exit.",
            Outcome::Lost => "Boom! Press any key to exit.",
            Outcome::Aborted => "Game aborted.",
        };
        let y = BOARD_TOP + snap.height as u16 + 3;
        fb.put_str(LEFT, y, text, status_style(snap.outcome).bold());
    }
}

fn status_style(outcome: Outcome) -> CellStyle {
    match outcome {
        Outcome::Playing => CellStyle::fg(Color::Grey),
        Outcome::Won => CellStyle::fg(Color::Green),
        Outcome::Lost => CellStyle::fg(Color::Red),
        Outcome::Aborted => CellStyle::fg(Color::Yellow),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
