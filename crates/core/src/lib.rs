//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board rules of the lavender harvest puzzle: dealing
//! boards, finding matches, harvesting traced chains, collapsing columns,
//! keeping a move available, and scoring. It has **zero dependencies** on
//! rendering, input devices or I/O, making it:
//!
//! - **Deterministic**: the random source is injected; same seed, same game
//! - **Testable**: every rule is a plain function over a [`Board`]
//! - **Portable**: any presentation layer can drive it
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid storage and neighbour lookup
//! - [`region`]: iterative flood fill, match detection
//! - [`generator`]: match-free board generation
//! - [`collapse`]: removal, gravity and refill
//! - [`repair`]: reshuffle and forced-run fallback
//! - [`selection`]: incremental validation of traced chains
//! - [`scoring`]: chain score formula
//! - [`engine`]: [`BoardEngine`], the owner of board and rules
//! - [`session`]: score, countdown, pause and drag state for one game
//! - [`snapshot`]: plain-data session view
//! - [`rng`]: injectable random source and the default LCG
//!
//! # Game Rules
//!
//! - Fresh boards contain no region of three or more same-tag cells
//! - A player traces a path of orthogonally adjacent same-tag cells; three or
//!   more cells can be harvested
//! - Harvested cells vanish, columns fall, the top refills at random
//! - If no region of three remains, the board is reshuffled; after the retry
//!   budget a straight run of three is painted in
//! - `score = 10 * len * (1 + min(len - 2, 5) * 0.5)`
//!
//! # Example
//!
//! ```
//! use lavender_harvest_core::{region, BoardEngine, EngineConfig};
//!
//! let mut engine = BoardEngine::new(EngineConfig::default()).unwrap();
//!
//! // A fresh game always has a match to trace.
//! let cells = region::find_any_match(engine.board()).unwrap();
//!
//! // Trace the first three cells of a path through it.
//! let mut selection = engine.begin_selection(cells[0]).unwrap();
//! for &pos in &cells[1..] {
//!     let _ = engine.extend_selection(&mut selection, pos);
//! }
//! if selection.is_committable() {
//!     let outcome = engine.commit_selection(&selection).unwrap();
//!     assert!(outcome.score_delta >= 45);
//! }
//! assert!(region::has_any_valid_move(engine.board()));
//! ```

pub mod board;
pub mod collapse;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod region;
pub mod repair;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod snapshot;

pub use lavender_harvest_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use engine::{BoardEngine, CommitOutcome, EngineEvent};
pub use error::{ConfigError, EngineError};
pub use generator::{BoardGenerator, MatchFreeGenerator, RandomFillGenerator};
pub use region::{find_any_match, find_region, has_any_valid_move, region_size};
pub use repair::Repair;
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{chain_score, score_chain, ChainScore};
pub use selection::Selection;
pub use session::{Session, SessionAction};
pub use snapshot::GameSnapshot;
