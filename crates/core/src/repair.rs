//! Repair module - the "at least one move" guarantee
//!
//! When a board has no match left the engine reshuffles it:
//!
//! 1. regenerate the whole board with the configured generator
//! 2. retry regeneration up to the attempt budget while no match exists
//! 3. otherwise force a straight run of three same-tag cells
//!
//! Step 3 always succeeds, so repair never fails.

use log::{info, warn};
use serde::Serialize;

use crate::board::Board;
use crate::generator::BoardGenerator;
use crate::region::has_any_valid_move;
use crate::rng::{random_tag, RandomSource};
use crate::types::{Palette, Pos, Tag, MIN_MATCH_LEN};

/// What a repair pass did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Repair {
    /// The board already had a move
    NotNeeded,
    /// A regenerated board had a move after `attempts` generations
    Regenerated { attempts: u32 },
    /// Regeneration ran out of budget and a run was painted in
    Forced {
        attempts: u32,
        run: [Pos; MIN_MATCH_LEN],
        tag: Tag,
    },
}

impl Repair {
    /// True when the board content changed without player action
    pub fn reshuffled(&self) -> bool {
        !matches!(self, Repair::NotNeeded)
    }

    pub fn forced(&self) -> bool {
        matches!(self, Repair::Forced { .. })
    }
}

/// Paint a straight run of three cells with one random tag. The start
/// coordinate is drawn from `[0, size - 1)` on both axes; the run goes right
/// when it fits, otherwise down (start row pulled up so the run fits).
///
/// # Panics
///
/// Panics if the board is smaller than a run; the engine rejects such boards
/// before they reach repair.
pub fn force_run<R: RandomSource + ?Sized>(
    board: &mut Board,
    palette: Palette,
    rng: &mut R,
) -> ([Pos; MIN_MATCH_LEN], Tag) {
    let size = board.size();
    assert!(
        size >= MIN_MATCH_LEN,
        "a {}x{} board cannot hold a run of {}",
        size,
        size,
        MIN_MATCH_LEN
    );
    let span = (size - 1) as u32;
    let row = rng.next_range(span) as usize;
    let col = rng.next_range(span) as usize;
    let tag = random_tag(rng, palette);

    let run: [Pos; MIN_MATCH_LEN] = if col + MIN_MATCH_LEN - 1 < size {
        std::array::from_fn(|i| Pos::new(row, col + i))
    } else {
        let row = row.min(size - MIN_MATCH_LEN);
        std::array::from_fn(|i| Pos::new(row + i, col))
    };

    for pos in run {
        board.set(pos, Some(tag));
    }

    (run, tag)
}

/// Make sure `board` has at least one match, reshuffling if necessary.
///
/// `extra_attempts` regenerations follow the first one before the forced
/// run is painted.
pub fn ensure_valid_move<R, G>(
    board: &mut Board,
    palette: Palette,
    rng: &mut R,
    generator: &mut G,
    extra_attempts: u32,
) -> Repair
where
    R: RandomSource,
    G: BoardGenerator + ?Sized,
{
    if has_any_valid_move(board) {
        return Repair::NotNeeded;
    }

    let size = board.size();
    let mut attempts = 0;
    loop {
        *board = generator.generate(size, palette, &mut *rng);
        attempts += 1;
        if has_any_valid_move(board) {
            info!("reshuffled board after {} generation(s)", attempts);
            return Repair::Regenerated { attempts };
        }
        if attempts > extra_attempts {
            break;
        }
    }

    let (run, tag) = force_run(board, palette, rng);
    warn!(
        "no move after {} generation(s); forced run of {:?} at {:?}",
        attempts, tag, run
    );
    Repair::Forced {
        attempts,
        run,
        tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{MatchFreeGenerator, RandomFillGenerator};
    use crate::rng::SimpleRng;

    /// Always deals a two-tag checkerboard, which never has a match.
    struct Checkerboard {
        calls: u32,
    }

    impl BoardGenerator for Checkerboard {
        fn generate(&mut self, size: usize, _: Palette, _: &mut dyn RandomSource) -> Board {
            self.calls += 1;
            let rows: Vec<Vec<u8>> = (0..size)
                .map(|r| (0..size).map(|c| ((r + c) % 2) as u8).collect())
                .collect();
            Board::from_rows(&rows).unwrap()
        }
    }

    #[test]
    fn test_board_with_move_is_untouched() {
        let mut board = Board::from_rows(&[[0u8, 0, 0], [1, 2, 1], [2, 1, 2]]).unwrap();
        let before = board.clone();
        let repair = ensure_valid_move(
            &mut board,
            Palette::default(),
            &mut SimpleRng::new(1),
            &mut MatchFreeGenerator::default(),
            10,
        );
        assert_eq!(repair, Repair::NotNeeded);
        assert!(!repair.reshuffled());
        assert_eq!(board, before);
    }

    #[test]
    fn test_forced_fix_after_budget() {
        let mut gen = Checkerboard { calls: 0 };
        let mut board = gen.generate(8, Palette::default(), &mut SimpleRng::new(1));

        let repair = ensure_valid_move(
            &mut board,
            Palette::default(),
            &mut SimpleRng::new(1),
            &mut gen,
            10,
        );

        assert!(repair.forced());
        assert_eq!(gen.calls, 1 + 11);
        assert!(has_any_valid_move(&board));
        match repair {
            Repair::Forced { attempts, run, tag } => {
                assert_eq!(attempts, 11);
                for pos in run {
                    assert_eq!(board.tag(pos), Some(tag));
                }
            }
            other => panic!("expected forced repair, got {:?}", other),
        }
    }

    #[test]
    fn test_random_fill_regenerates() {
        let mut board = Board::from_rows(&[[0u8, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
        let repair = ensure_valid_move(
            &mut board,
            Palette::new(2).unwrap(),
            &mut SimpleRng::new(11),
            &mut RandomFillGenerator,
            50,
        );
        assert!(repair.reshuffled());
        assert!(has_any_valid_move(&board));
    }

    #[test]
    #[should_panic(expected = "cannot hold a run")]
    fn test_force_run_refuses_tiny_board() {
        let mut board = Board::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        force_run(&mut board, Palette::default(), &mut SimpleRng::new(1));
    }

    #[test]
    fn test_force_run_stays_in_bounds() {
        for size in 3..10 {
            for seed in 1..200 {
                let mut board = Board::new(size);
                let (run, _) = force_run(&mut board, Palette::default(), &mut SimpleRng::new(seed));
                for pos in run {
                    assert!(board.contains(pos), "{:?} outside {}x{}", pos, size, size);
                }
                let horizontal = run.windows(2).all(|w| w[0].row == w[1].row && w[1].col == w[0].col + 1);
                let vertical = run.windows(2).all(|w| w[0].col == w[1].col && w[1].row == w[0].row + 1);
                assert!(horizontal || vertical);
            }
        }
    }
}
