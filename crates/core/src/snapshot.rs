use crate::types::{CellValue, Coord, Outcome, Status, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSnapshot {
    pub value: CellValue,
    pub visibility: Visibility,
}

/// Render-ready copy of a board, row-major cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    pub height: u8,
    pub width: u8,
    pub cells: Vec<CellSnapshot>,
    pub cursor: (Coord, Coord),
    pub mines: u32,
    pub flags: u32,
    pub outcome: Outcome,
    pub elapsed_ms: u64,
}

impl BoardSnapshot {
    pub fn cell(&self, row: Coord, col: Coord) -> Option<CellSnapshot> {
        if row < 0 || col < 0 || row >= self.height as Coord || col >= self.width as Coord {
            return None;
        }
        self.cells
            .get((row as usize) * (self.width as usize) + (col as usize))
            .copied()
    }

    pub fn is_cursor(&self, row: Coord, col: Coord) -> bool {
        self.cursor == (row, col)
    }

    pub fn status(&self) -> Status {
        Status::from(self.outcome)
    }

    pub fn lost(&self) -> bool {
        self.outcome == Outcome::Lost
    }
}
