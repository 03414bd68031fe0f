//! Region module - connected same-tag search
//!
//! A region is the maximal set of cells reachable from a seed through
//! up/down/left/right steps onto cells with the seed's tag. A region of at
//! least [`MIN_MATCH_LEN`] cells is a match.
//!
//! The flood fill uses an explicit stack, so board size never affects call
//! depth.

use crate::board::Board;
use crate::types::{Pos, MIN_MATCH_LEN};

/// Flood fill from `seed`, returning the whole connected region regardless of
/// its size. Empty or out-of-bounds seeds yield an empty region.
fn flood(board: &Board, seed: Pos) -> Vec<Pos> {
    let Some(tag) = board.tag(seed) else {
        return Vec::new();
    };

    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut region = Vec::new();
    let mut stack = vec![seed];
    visited[seed.row * size + seed.col] = true;

    while let Some(pos) = stack.pop() {
        region.push(pos);
        // Reverse push keeps the up, down, left, right visiting order.
        for next in board.neighbors(pos).into_iter().rev() {
            let idx = next.row * size + next.col;
            if !visited[idx] && board.tag(next) == Some(tag) {
                visited[idx] = true;
                stack.push(next);
            }
        }
    }

    region
}

/// Size of the connected same-tag region containing `seed`.
pub fn region_size(board: &Board, seed: Pos) -> usize {
    flood(board, seed).len()
}

/// The match containing `seed`: its full region when it has at least
/// [`MIN_MATCH_LEN`] cells, otherwise empty.
pub fn find_region(board: &Board, seed: Pos) -> Vec<Pos> {
    let region = flood(board, seed);
    if region.len() >= MIN_MATCH_LEN {
        region
    } else {
        Vec::new()
    }
}

/// First match found scanning seeds in row-major order.
pub fn find_any_match(board: &Board) -> Option<Vec<Pos>> {
    let size = board.size();
    let mut seen = vec![false; size * size];

    for pos in board.positions() {
        if seen[pos.row * size + pos.col] {
            continue;
        }
        let region = flood(board, pos);
        if region.len() >= MIN_MATCH_LEN {
            return Some(region);
        }
        for p in region {
            seen[p.row * size + p.col] = true;
        }
    }

    None
}

/// True iff some coordinate belongs to a match.
pub fn has_any_valid_move(board: &Board) -> bool {
    find_any_match(board).is_some()
}

/// Every distinct match on the board, each listed once.
pub fn all_matches(board: &Board) -> Vec<Vec<Pos>> {
    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut out = Vec::new();

    for pos in board.positions() {
        if seen[pos.row * size + pos.col] {
            continue;
        }
        let region = flood(board, pos);
        for p in &region {
            seen[p.row * size + p.col] = true;
        }
        if region.len() >= MIN_MATCH_LEN {
            out.push(region);
        }
    }

    out
}
