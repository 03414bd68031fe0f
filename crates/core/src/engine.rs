//! Engine module - owns the board and applies every rule to it
//!
//! [`BoardEngine`] ties together the board, the random source, the generator,
//! removal/collapse, repair and scoring. Every mutating call finishes with the
//! board holding at least one match.

use log::debug;
use serde::Serialize;

use crate::board::Board;
use crate::collapse::{apply_gravity, clear_cells, refill};
use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError};
use crate::generator::{BoardGenerator, MatchFreeGenerator};
use crate::repair::{ensure_valid_move, Repair};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::chain_score;
use crate::selection::Selection;
use crate::types::{Cell, ChainTier, Palette, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Result of a committed selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    /// Cells the player traced, in trace order
    pub removed: Vec<Pos>,
    pub score_delta: u32,
    pub tier: ChainTier,
    pub repair: Repair,
    /// Board content changed without player action
    pub reshuffled: bool,
    /// Cells that received a fresh tag during refill
    pub refilled: Vec<Pos>,
    #[serde(skip)]
    pub board: Board,
}

/// Engine notifications for observers (consumed with `take_last_event`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineEvent {
    /// A new board was dealt
    NewBoard { repair: Repair },
    /// The board was reshuffled after a commit left no move
    Reshuffled { repair: Repair },
}

/// Board engine over an injectable random source and generator
#[derive(Debug, Clone)]
pub struct BoardEngine<R = SimpleRng, G = MatchFreeGenerator> {
    config: EngineConfig,
    palette: Palette,
    board: Board,
    rng: R,
    generator: G,
    /// Number of reshuffles since construction (new boards excluded)
    reshuffles: u32,
    /// Last board-level event (consumed by observers).
    last_event: Option<EngineEvent>,
}

impl BoardEngine {
    /// Create an engine seeded from `config.seed` and deal the first board.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let generator = MatchFreeGenerator::new(config.generate_pass_limit);
        Self::with_parts(config, SimpleRng::new(config.seed), generator)
    }
}

impl<R: RandomSource, G: BoardGenerator> BoardEngine<R, G> {
    /// Create an engine with an explicit random source and generator and
    /// deal the first board.
    pub fn with_parts(config: EngineConfig, rng: R, generator: G) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        let mut engine = Self {
            config,
            palette,
            board: Board::new(config.board_size),
            rng,
            generator,
            reshuffles: 0,
            last_event: None,
        };
        engine.new_game();
        Ok(engine)
    }

    /// Deal a fresh board and make sure it has a move.
    pub fn new_game(&mut self) -> Repair {
        self.board = self
            .generator
            .generate(self.config.board_size, self.palette, &mut self.rng);
        let repair = self.repair();
        debug!("new board dealt ({:?})", repair);
        self.last_event = Some(EngineEvent::NewBoard {
            repair: repair.clone(),
        });
        repair
    }

    fn repair(&mut self) -> Repair {
        ensure_valid_move(
            &mut self.board,
            self.palette,
            &mut self.rng,
            &mut self.generator,
            self.config.reshuffle_attempts,
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }

    pub fn take_last_event(&mut self) -> Option<EngineEvent> {
        self.last_event.take()
    }

    /// Cell at `(row, col)`
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        self.board
            .get(Pos::new(row, col))
            .ok_or(EngineError::InvalidCoordinate { row, col })
    }

    /// Start a selection on the current board.
    pub fn begin_selection(&self, pos: Pos) -> Result<Selection, EngineError> {
        Selection::start(&self.board, pos)
    }

    /// Append `pos` to `selection` if it continues the traced path.
    pub fn extend_selection(&self, selection: &mut Selection, pos: Pos) -> Result<(), EngineError> {
        selection.extend(&self.board, pos)
    }

    /// Harvest exactly the traced cells of `selection`.
    ///
    /// The cells are removed, columns collapse, empty cells are refilled and
    /// the board is repaired if no move remains. Newly formed matches are not
    /// cleared automatically.
    pub fn commit_selection(&mut self, selection: &Selection) -> Result<CommitOutcome, EngineError> {
        let len = selection.len();
        let Some(tier) = ChainTier::from_len(len) else {
            return Err(EngineError::SubThresholdCommit { len });
        };
        selection.validate(&self.board)?;

        let removed = selection.cells().to_vec();
        let (refilled, repair) = self.remove(&removed);
        let score_delta = chain_score(len);
        debug!(
            "harvested {} cell(s) for {} point(s), refilled {}",
            len,
            score_delta,
            refilled.len()
        );

        Ok(CommitOutcome {
            removed,
            score_delta,
            tier,
            reshuffled: repair.reshuffled(),
            repair,
            refilled,
            board: self.board.clone(),
        })
    }

    /// Remove `coords`, collapse, refill and repair. Returns the refilled
    /// cells and the repair outcome.
    pub fn remove(&mut self, coords: &[Pos]) -> (Vec<Pos>, Repair) {
        clear_cells(&mut self.board, coords);
        apply_gravity(&mut self.board);
        let refilled = refill(&mut self.board, self.palette, &mut self.rng);

        let repair = self.repair();
        if repair.reshuffled() {
            self.reshuffles = self.reshuffles.wrapping_add(1);
            self.last_event = Some(EngineEvent::Reshuffled {
                repair: repair.clone(),
            });
        }
        (refilled, repair)
    }

    /// Replace the board wholesale (for scripted scenarios and replays) and
    /// repair it if it has no move. Rejected boards leave the engine as it was.
    pub fn load_board(&mut self, board: Board) -> Result<Repair, EngineError> {
        let size = board.size();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(EngineError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if let Some(pos) = board
            .positions()
            .find(|&p| !board.tag(p).is_some_and(|t| self.palette.contains(t)))
        {
            return Err(match board.get(pos) {
                Some(Some(_)) => EngineError::TagMismatch,
                _ => EngineError::EmptyCell {
                    row: pos.row,
                    col: pos.col,
                },
            });
        }
        self.config.board_size = size;
        self.board = board;
        Ok(self.repair())
    }
}
