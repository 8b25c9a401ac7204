//! Per-cell glyph selection.
//!
//! [`glyph_for`] is the whole rendering contract between the board and the
//! terminal: given what a cell holds, what the player sees of it, whether the
//! cursor is on it and whether the game was lost, pick one glyph.

use crossterm::style::Color;

use crate::fb::CellStyle;
use crate::types::{CellValue, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Not revealed, not flagged.
    Hidden,
    Flag,
    /// Revealed cell with no adjacent mines.
    Blank,
    /// Revealed cell with 1..=8 adjacent mines.
    Digit(u8),
    Mine,
    /// The mine under the cursor when the game was lost.
    HitMine,
    /// A flag on a cell without a mine, shown after a loss.
    WrongFlag,
}

/// Pick the glyph for one cell.
///
/// After a loss every unflagged mine is shown (the one under the cursor
/// highlighted) and every flag on a safe cell is marked wrong.
pub fn glyph_for(value: CellValue, visibility: Visibility, is_cursor: bool, lost: bool) -> Glyph {
    if lost {
        match (value, visibility) {
            (CellValue::Mine, Visibility::Flagged) => return Glyph::Flag,
            (CellValue::Mine, _) if is_cursor => return Glyph::HitMine,
            (CellValue::Mine, _) => return Glyph::Mine,
            (CellValue::Count(_), Visibility::Flagged) => return Glyph::WrongFlag,
            _ => {}
        }
    }

    match visibility {
        Visibility::Hidden => Glyph::Hidden,
        Visibility::Flagged => Glyph::Flag,
        Visibility::Revealed => match value {
            CellValue::Mine => Glyph::Mine,
            CellValue::Count(0) => Glyph::Blank,
            CellValue::Count(n) => Glyph::Digit(n),
        },
    }
}

impl Glyph {
    pub fn ch(&self) -> char {
        match self {
            Glyph::Hidden => '.',
            Glyph::Flag => 'F',
            Glyph::Blank => ' ',
            Glyph::Digit(n) => char::from_digit(u32::from(*n), 10).unwrap_or('?'),
            Glyph::Mine | Glyph::HitMine => '*',
            Glyph::WrongFlag => 'X',
        }
    }

    pub fn style(&self) -> CellStyle {
        match self {
            Glyph::Hidden => CellStyle::fg(Color::DarkGrey),
            Glyph::Flag => CellStyle::fg(Color::Yellow).bold(),
            Glyph::Blank => CellStyle::default(),
            Glyph::Digit(n) => CellStyle::fg(digit_color(*n)).bold(),
            Glyph::Mine => CellStyle::fg(Color::White).bold(),
            Glyph::HitMine => CellStyle {
                fg: Color::White,
                bg: Color::DarkRed,
                bold: true,
                reverse: false,
            },
            Glyph::WrongFlag => CellStyle::fg(Color::Red).bold(),
        }
    }
}

/// Classic palette: 1 blue, 2 green, 3 and 5 red, 4 magenta, 6 cyan, 7-8 white.
fn digit_color(n: u8) -> Color {
    match n {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::Magenta,
        5 => Color::Red,
        6 => Color::Cyan,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playing_glyphs_follow_visibility() {
        assert_eq!(
            glyph_for(CellValue::Mine, Visibility::Hidden, false, false),
            Glyph::Hidden
        );
        assert_eq!(
            glyph_for(CellValue::Count(3), Visibility::Flagged, true, false),
            Glyph::Flag
        );
        assert_eq!(
            glyph_for(CellValue::Count(0), Visibility::Revealed, false, false),
            Glyph::Blank
        );
        assert_eq!(
            glyph_for(CellValue::Count(8), Visibility::Revealed, false, false),
            Glyph::Digit(8)
        );
        assert_eq!(
            glyph_for(CellValue::Mine, Visibility::Revealed, false, false),
            Glyph::Mine
        );
    }

    #[test]
    fn loss_reveals_mines_and_wrong_flags() {
        assert_eq!(
            glyph_for(CellValue::Mine, Visibility::Hidden, false, true),
            Glyph::Mine
        );
        assert_eq!(
            glyph_for(CellValue::Mine, Visibility::Revealed, true, true),
            Glyph::HitMine
        );
        assert_eq!(
            glyph_for(CellValue::Mine, Visibility::Flagged, false, true),
            Glyph::Flag
        );
        assert_eq!(
            glyph_for(CellValue::Count(2), Visibility::Flagged, false, true),
            Glyph::WrongFlag
        );
        assert_eq!(
            glyph_for(CellValue::Count(2), Visibility::Hidden, false, true),
            Glyph::Hidden
        );
    }

    #[test]
    fn glyph_chars() {
        assert_eq!(Glyph::Hidden.ch(), '.');
        assert_eq!(Glyph::Digit(5).ch(), '5');
        assert_eq!(Glyph::WrongFlag.ch(), 'X');
        assert_eq!(Glyph::HitMine.ch(), '*');
        assert_ne!(Glyph::HitMine.style(), Glyph::Mine.style());
    }

    #[test]
    fn digit_palette() {
        assert_eq!(Glyph::Digit(1).style().fg, Color::Blue);
        assert_eq!(Glyph::Digit(3).style().fg, Color::Red);
        assert_eq!(Glyph::Digit(5).style().fg, Color::Red);
        assert_eq!(Glyph::Digit(6).style().fg, Color::Cyan);
        assert_eq!(Glyph::Digit(8).style().fg, Color::White);
    }
}
