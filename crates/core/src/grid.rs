//! Grid module - bounds-checked 2D storage
//!
//! Cells are stored row-major in a flat `Vec` (`row * width + col`) for cache
//! locality. Every accessor validates the coordinate first and returns `None`
//! (or `false`) when it falls outside the grid, so callers never index blindly.

use arrayvec::ArrayVec;

use crate::types::Coord;

/// Offsets of the 8-neighbourhood, row-major order.
const NEIGHBOR_OFFSETS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size `height x width` grid of `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: u8,
    width: u8,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    pub fn new(height: u8, width: u8) -> Self {
        let len = (height as usize) * (width as usize);
        Self {
            height,
            width,
            cells: vec![T::default(); len],
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: Coord, col: Coord) -> Option<usize> {
        if !self.contains(row, col) {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    /// Coordinate of a flat index, if it is inside the grid.
    pub fn position(&self, index: usize) -> Option<(Coord, Coord)> {
        if index >= self.cells.len() {
            return None;
        }
        let width = self.width as usize;
        Some(((index / width) as Coord, (index % width) as Coord))
    }

    pub fn contains(&self, row: Coord, col: Coord) -> bool {
        row >= 0 && col >= 0 && row < self.height as Coord && col < self.width as Coord
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: Coord, col: Coord) -> Option<T> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: Coord, col: Coord, value: T) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to `value`, keeping the allocation.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// In-bounds 8-neighbours of (row, col), excluding the cell itself.
    ///
    /// Corner cells have 3 neighbours, edge cells 5, interior cells 8.
    pub fn neighbors(&self, row: Coord, col: Coord) -> ArrayVec<(Coord, Coord), 8> {
        let mut out = ArrayVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
                continue;
            };
            if self.contains(r, c) {
                out.push((r, c));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_out_of_bounds() {
        let grid: Grid<u8> = Grid::new(3, 4);

        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(2, 3), Some(0));

        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
        assert_eq!(grid.get(Coord::MAX, Coord::MIN), None);
    }

    #[test]
    fn test_grid_set_is_row_major() {
        let mut grid: Grid<u8> = Grid::new(2, 3);

        assert!(grid.set(1, 2, 7));
        assert!(!grid.set(2, 0, 9));
        assert_eq!(grid.as_slice(), &[0, 0, 0, 0, 0, 7]);
        assert_eq!(grid.position(5), Some((1, 2)));
        assert_eq!(grid.position(6), None);
    }

    #[test]
    fn test_neighbors_are_clipped_at_edges() {
        let grid: Grid<u8> = Grid::new(3, 3);

        assert_eq!(grid.neighbors(0, 0).len(), 3);
        assert_eq!(grid.neighbors(0, 1).len(), 5);
        assert_eq!(grid.neighbors(1, 1).len(), 8);
        assert!(!grid.neighbors(1, 1).contains(&(1, 1)));

        let single: Grid<u8> = Grid::new(1, 1);
        assert!(single.neighbors(0, 0).is_empty());
    }
}
