//! Generator module - fresh board construction
//!
//! [`MatchFreeGenerator`] fills the board uniformly at random and then
//! re-rolls cells until no match remains. Callers that need a valid move must
//! follow up with [`crate::repair::ensure_valid_move`].

use log::{debug, warn};

use crate::board::Board;
use crate::region::region_size;
use crate::rng::{random_tag, RandomSource};
use crate::types::{Palette, GENERATE_PASS_LIMIT, MIN_MATCH_LEN};

/// Produces complete boards for new games and reshuffles
pub trait BoardGenerator {
    fn generate(&mut self, size: usize, palette: Palette, rng: &mut dyn RandomSource) -> Board;
}

/// Fill every cell of `board` with a random tag.
pub fn fill_random<R: RandomSource + ?Sized>(board: &mut Board, palette: Palette, rng: &mut R) {
    for pos in board.positions() {
        board.set(pos, Some(random_tag(rng, palette)));
    }
}

/// Re-roll cells that belong to a match, scanning the whole board until a
/// pass changes nothing or `pass_limit` passes have run. Returns the number
/// of passes and whether the board ended match-free.
pub fn strip_matches<R: RandomSource + ?Sized>(
    board: &mut Board,
    palette: Palette,
    rng: &mut R,
    pass_limit: u32,
) -> (u32, bool) {
    let mut passes = 0;
    while passes < pass_limit {
        passes += 1;
        let mut rerolled = false;
        for pos in board.positions() {
            // Earlier re-rolls in this pass may already have broken the region.
            if region_size(board, pos) >= MIN_MATCH_LEN {
                board.set(pos, Some(random_tag(rng, palette)));
                rerolled = true;
            }
        }
        if !rerolled {
            return (passes, true);
        }
    }
    (passes, false)
}

/// Uniform fill followed by match stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFreeGenerator {
    pub pass_limit: u32,
}

impl MatchFreeGenerator {
    pub fn new(pass_limit: u32) -> Self {
        Self { pass_limit }
    }
}

impl Default for MatchFreeGenerator {
    fn default() -> Self {
        Self::new(GENERATE_PASS_LIMIT)
    }
}

impl BoardGenerator for MatchFreeGenerator {
    fn generate(&mut self, size: usize, palette: Palette, rng: &mut dyn RandomSource) -> Board {
        let mut board = Board::new(size);
        fill_random(&mut board, palette, rng);
        let (passes, clean) = strip_matches(&mut board, palette, rng, self.pass_limit);
        if clean {
            debug!("generated {}x{} board in {} pass(es)", size, size, passes);
        } else {
            warn!(
                "generator hit pass limit ({}) with matches still on the board",
                self.pass_limit
            );
        }
        board
    }
}

/// Uniform fill only; matches are left in place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomFillGenerator;

impl BoardGenerator for RandomFillGenerator {
    fn generate(&mut self, size: usize, palette: Palette, rng: &mut dyn RandomSource) -> Board {
        let mut board = Board::new(size);
        fill_random(&mut board, palette, rng);
        board
    }
}
