//! Mine placement and adjacency counts.
//!
//! Mines are placed by rejection sampling: pick a uniformly random row and
//! column, retry if that cell already holds a mine. On dense boards (more than
//! half the cells mined) that loop degrades, so placement switches to drawing
//! distinct flat indices instead. Both strategies produce exactly `mines`
//! distinct, uniformly placed mines.

use rand::seq::index;
use rand::Rng;

use crate::grid::Grid;
use crate::types::{CellValue, Coord};

/// Clear `truth`, then place exactly `mines` mines and compute every count.
///
/// `mines` must be smaller than the number of cells; [`crate::types::BoardConfig`]
/// guarantees that before a board exists.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, truth: &mut Grid<CellValue>, mines: u32) {
    truth.fill(CellValue::Count(0));

    let mines = (mines as usize).min(truth.len().saturating_sub(1));
    if mines.saturating_mul(2) <= truth.len() {
        place_by_rejection(rng, truth, mines);
    } else {
        place_by_sampling(rng, truth, mines);
    }

    fill_counts(truth);
}

fn place_by_rejection<R: Rng + ?Sized>(rng: &mut R, truth: &mut Grid<CellValue>, mines: usize) {
    let height = truth.height() as Coord;
    let width = truth.width() as Coord;

    let mut placed = 0usize;
    while placed < mines {
        let row = rng.gen_range(0..height);
        let col = rng.gen_range(0..width);
        if truth.get(row, col) == Some(CellValue::Count(0)) {
            truth.set(row, col, CellValue::Mine);
            placed += 1;
        }
    }
}

fn place_by_sampling<R: Rng + ?Sized>(rng: &mut R, truth: &mut Grid<CellValue>, mines: usize) {
    for idx in index::sample(rng, truth.len(), mines).iter() {
        if let Some((row, col)) = truth.position(idx) {
            truth.set(row, col, CellValue::Mine);
        }
    }
}

/// Number of mines among the in-bounds 8-neighbours of (row, col).
pub fn adjacent_mines(truth: &Grid<CellValue>, row: Coord, col: Coord) -> u8 {
    truth
        .neighbors(row, col)
        .iter()
        .filter(|&&(r, c)| matches!(truth.get(r, c), Some(CellValue::Mine)))
        .count() as u8
}

/// Replace every non-mine cell with its adjacency count.
pub fn fill_counts(truth: &mut Grid<CellValue>) {
    for row in 0..truth.height() as Coord {
        for col in 0..truth.width() as Coord {
            if truth.get(row, col) != Some(CellValue::Mine) {
                let n = adjacent_mines(truth, row, col);
                truth.set(row, col, CellValue::Count(n));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mine_count(truth: &Grid<CellValue>) -> usize {
        truth.as_slice().iter().filter(|v| v.is_mine()).count()
    }

    #[test]
    fn test_sparse_board_uses_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut truth = Grid::new(8, 8);
        generate(&mut rng, &mut truth, 10);
        assert_eq!(mine_count(&truth), 10);
    }

    #[test]
    fn test_dense_board_uses_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut truth = Grid::new(10, 10);
        generate(&mut rng, &mut truth, 99);
        assert_eq!(mine_count(&truth), 99);
    }

    #[test]
    fn test_regenerate_replaces_previous_layout() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut truth = Grid::new(16, 30);
        generate(&mut rng, &mut truth, 99);
        generate(&mut rng, &mut truth, 5);
        assert_eq!(mine_count(&truth), 5);
    }

    #[test]
    fn test_counts_match_neighbours() {
        let mut truth = Grid::new(3, 3);
        truth.set(0, 0, CellValue::Mine);
        truth.set(2, 2, CellValue::Mine);
        fill_counts(&mut truth);

        assert_eq!(truth.get(0, 1), Some(CellValue::Count(1)));
        assert_eq!(truth.get(1, 1), Some(CellValue::Count(2)));
        assert_eq!(truth.get(0, 2), Some(CellValue::Count(0)));
        assert_eq!(truth.get(2, 0), Some(CellValue::Count(0)));
        assert_eq!(truth.get(2, 2), Some(CellValue::Mine));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = Grid::new(16, 16);
        let mut b = Grid::new(16, 16);
        generate(&mut StdRng::seed_from_u64(42), &mut a, 40);
        generate(&mut StdRng::seed_from_u64(42), &mut b, 40);
        assert_eq!(a, b);
    }
}
