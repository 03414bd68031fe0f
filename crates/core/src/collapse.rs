//! Collapse module - removal, gravity and refill
//!
//! Removal empties cells, gravity compacts each column downward, refill draws
//! fresh tags for whatever is left empty at the top. No automatic clears
//! follow a refill, even when it lines up new matches.

use crate::board::Board;
use crate::rng::{random_tag, RandomSource};
use crate::types::{Palette, Pos};

/// Empty every listed coordinate. Returns how many cells were cleared
/// (out-of-bounds and already-empty coordinates are skipped).
pub fn clear_cells(board: &mut Board, coords: &[Pos]) -> usize {
    let mut cleared = 0;
    for &pos in coords {
        if matches!(board.get(pos), Some(Some(_))) {
            board.set(pos, None);
            cleared += 1;
        }
    }
    cleared
}

/// Compact non-empty cells to the bottom of each column, keeping their
/// top-to-bottom order. Vacated cells at the top are left empty.
/// Uses a two-pointer pass per column.
pub fn apply_gravity(board: &mut Board) {
    let size = board.size();
    for col in 0..size {
        let mut write_row = size;
        // Scan from bottom to top
        for read_row in (0..size).rev() {
            let cell = board.get(Pos::new(read_row, col)).flatten();
            if cell.is_some() {
                write_row -= 1;
                if write_row != read_row {
                    board.set(Pos::new(write_row, col), cell);
                    board.set(Pos::new(read_row, col), None);
                }
            }
        }
    }
}

/// Draw a random tag for every empty cell. Returns the cells that were filled
/// in row-major order.
pub fn refill<R: RandomSource + ?Sized>(board: &mut Board, palette: Palette, rng: &mut R) -> Vec<Pos> {
    let mut filled = Vec::new();
    for pos in board.positions() {
        if board.get(pos) == Some(None) {
            board.set(pos, Some(random_tag(rng, palette)));
            filled.push(pos);
        }
    }
    filled
}
