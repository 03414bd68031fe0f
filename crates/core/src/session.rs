//! Session module - one timed game over a board engine
//!
//! The session adds what a single play-through needs on top of the engine:
//! the running score, a countdown clock advanced by [`Session::tick`], pause
//! and game-over state, and the selection the player is currently dragging.
//! Time is logical; the caller decides how many milliseconds pass per tick.

use log::{debug, info};

use crate::config::EngineConfig;
use crate::engine::{BoardEngine, CommitOutcome};
use crate::error::{ConfigError, EngineError};
use crate::generator::{BoardGenerator, MatchFreeGenerator};
use crate::rng::{RandomSource, SimpleRng};
use crate::selection::Selection;
use crate::snapshot::GameSnapshot;
use crate::types::{HarvestRating, Pos};

/// Input forwarded by a presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Pointer pressed on a cell
    Press(Pos),
    /// Pointer dragged onto a cell
    Drag(Pos),
    /// Pointer released; harvests a committable selection
    Release,
    /// Pointer left the board; drops the selection
    Cancel,
    /// Start a timed game unless one is running
    Start,
    Pause,
    Restart,
    /// Leave the game for the menu
    Stop,
}

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng, G = MatchFreeGenerator> {
    engine: BoardEngine<R, G>,
    selection: Selection,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    score: u32,
    /// Successful harvests this episode.
    moves: u32,
    time_left_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl Session {
    /// Create a session with the default random source and generator
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(BoardEngine::new(config)?))
    }
}

impl<R: RandomSource, G: BoardGenerator> Session<R, G> {
    /// Wrap an existing engine; the session is not started yet.
    pub fn from_engine(engine: BoardEngine<R, G>) -> Self {
        let time_left_ms = engine.config().time_limit_ms;
        Self {
            engine,
            selection: Selection::new(),
            episode_id: 0,
            score: 0,
            moves: 0,
            time_left_ms,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    /// Start a timed game with a fresh score and clock on the current board.
    /// Does nothing while a game is running; a paused, stopped or finished
    /// game starts over.
    pub fn start(&mut self) {
        if self.playable() {
            return;
        }
        self.started = true;
        self.paused = false;
        self.game_over = false;
        self.score = 0;
        self.moves = 0;
        self.time_left_ms = self.engine.config().time_limit_ms;
        self.selection.clear();
    }

    /// Deal a new board and start over.
    pub fn restart(&mut self) {
        self.engine.new_game();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = false;
        self.start();
        info!("session restarted (episode {})", self.episode_id);
    }

    /// Leave the current game. Score and clock stay readable until the next
    /// `start`.
    pub fn stop(&mut self) {
        if self.started {
            debug!("session stopped with {} ms left", self.time_left_ms);
        }
        self.started = false;
        self.paused = false;
        self.selection.clear();
    }

    pub fn engine(&self) -> &BoardEngine<R, G> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut BoardEngine<R, G> {
        &mut self.engine
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn time_left_ms(&self) -> u32 {
        self.time_left_ms
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Running, unpaused and not out of time
    pub fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    pub fn rating(&self) -> HarvestRating {
        HarvestRating::from_score(self.score)
    }

    /// Toggle pause. Only a running game can pause. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        if self.started && !self.game_over {
            self.paused = !self.paused;
        }
        self.paused
    }

    /// Advance the clock by `elapsed_ms`. Returns true on the tick that ends
    /// the game.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.playable() {
            return false;
        }
        self.time_left_ms = self.time_left_ms.saturating_sub(elapsed_ms);
        if self.time_left_ms == 0 {
            self.game_over = true;
            self.selection.clear();
            info!(
                "time up: score {} over {} harvest(s) ({})",
                self.score,
                self.moves,
                self.rating().as_str()
            );
            return true;
        }
        false
    }

    fn ensure_playable(&self) -> Result<(), EngineError> {
        if self.playable() {
            Ok(())
        } else {
            Err(EngineError::NotPlayable)
        }
    }

    /// Start a new drag at `pos`, replacing any selection in progress.
    pub fn begin_selection(&mut self, pos: Pos) -> Result<(), EngineError> {
        self.ensure_playable()?;
        self.selection = self.engine.begin_selection(pos)?;
        Ok(())
    }

    /// Extend the drag onto `pos`. A drag with no selection yet starts one.
    pub fn drag_to(&mut self, pos: Pos) -> Result<(), EngineError> {
        self.ensure_playable()?;
        if self.selection.is_empty() {
            return self.begin_selection(pos);
        }
        self.engine.extend_selection(&mut self.selection, pos)
    }

    /// Finish the drag. A committable selection is harvested and scored;
    /// anything shorter is dropped and `Ok(None)` is returned.
    pub fn release(&mut self) -> Result<Option<CommitOutcome>, EngineError> {
        self.ensure_playable()?;
        let selection = std::mem::take(&mut self.selection);
        if !selection.is_committable() {
            return Ok(None);
        }

        let outcome = self.engine.commit_selection(&selection)?;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves = self.moves.wrapping_add(1);
        debug!(
            "harvest #{}: +{} (total {})",
            self.moves, outcome.score_delta, self.score
        );
        Ok(Some(outcome))
    }

    /// Drop the selection in progress.
    pub fn cancel_selection(&mut self) {
        self.selection.clear();
    }

    /// Apply a presentation-layer action
    pub fn apply_action(
        &mut self,
        action: SessionAction,
    ) -> Result<Option<CommitOutcome>, EngineError> {
        match action {
            SessionAction::Press(pos) => self.begin_selection(pos).map(|_| None),
            SessionAction::Drag(pos) => self.drag_to(pos).map(|_| None),
            SessionAction::Release => self.release(),
            SessionAction::Cancel => {
                self.cancel_selection();
                Ok(None)
            }
            SessionAction::Start => {
                self.start();
                Ok(None)
            }
            SessionAction::Stop => {
                self.stop();
                Ok(None)
            }
            SessionAction::Pause => {
                self.toggle_pause();
                Ok(None)
            }
            SessionAction::Restart => {
                self.restart();
                Ok(None)
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let engine = &self.engine;
        engine.board().write_u8_grid(&mut out.board);
        out.size = engine.size();
        out.palette_size = engine.palette().size();
        out.selection.clear();
        out.selection.extend_from_slice(self.selection.cells());
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.moves = self.moves;
        out.reshuffles = engine.reshuffle_count();
        out.time_left_ms = self.time_left_ms;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.rating = self.game_over.then(|| self.rating());
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::has_any_valid_move;

    fn session() -> Session {
        let mut s = Session::new(EngineConfig::default()).unwrap();
        s.start();
        s
    }

    #[test]
    fn test_session_lifecycle() {
        let mut s = Session::new(EngineConfig::default()).unwrap();
        assert!(!s.started());
        assert!(!s.playable());

        s.start();
        assert!(s.started());
        assert!(s.playable());
        assert_eq!(s.time_left_ms(), 60_000);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_actions_rejected_before_start() {
        let mut s = Session::new(EngineConfig::default()).unwrap();
        assert_eq!(s.begin_selection(Pos::new(0, 0)), Err(EngineError::NotPlayable));
        assert_eq!(s.release(), Err(EngineError::NotPlayable));
    }

    #[test]
    fn test_tick_counts_down_and_ends_game() {
        let mut s = session();
        assert!(!s.tick(59_000));
        assert_eq!(s.time_left_ms(), 1_000);
        assert!(s.tick(5_000));
        assert!(s.game_over());
        assert_eq!(s.time_left_ms(), 0);
        // Further ticks are ignored.
        assert!(!s.tick(1_000));
    }

    #[test]
    fn test_pause_freezes_clock_and_input() {
        let mut s = session();
        assert!(s.toggle_pause());
        assert!(!s.tick(10_000));
        assert_eq!(s.time_left_ms(), 60_000);
        assert_eq!(s.drag_to(Pos::new(0, 0)), Err(EngineError::NotPlayable));

        assert!(!s.toggle_pause());
        s.tick(10_000);
        assert_eq!(s.time_left_ms(), 50_000);
    }

    #[test]
    fn test_short_release_is_dropped() {
        let mut s = session();
        s.begin_selection(Pos::new(0, 0)).unwrap();
        let before = s.engine().board().clone();

        assert_eq!(s.release(), Ok(None));
        assert!(s.selection().is_empty());
        assert_eq!(s.engine().board(), &before);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_start_after_game_over_begins_a_new_game() {
        let mut s = session();
        s.tick(60_000);
        assert!(s.game_over());

        s.start();
        assert!(s.playable());
        assert!(!s.game_over());
        assert_eq!(s.time_left_ms(), 60_000);
        assert_eq!(s.score(), 0);
        assert_eq!(s.begin_selection(Pos::new(0, 0)), Ok(()));
    }

    #[test]
    fn test_start_while_running_keeps_the_clock() {
        let mut s = session();
        s.tick(10_000);
        s.start();
        assert_eq!(s.time_left_ms(), 50_000);
    }

    #[test]
    fn test_stop_returns_to_menu() {
        let mut s = session();
        s.begin_selection(Pos::new(1, 1)).unwrap();
        s.toggle_pause();
        s.tick(5_000);

        assert_eq!(s.apply_action(SessionAction::Stop), Ok(None));
        assert!(!s.started());
        assert!(!s.paused());
        assert!(s.selection().is_empty());
        assert_eq!(s.drag_to(Pos::new(0, 0)), Err(EngineError::NotPlayable));
        assert!(!s.tick(1_000));

        assert_eq!(s.apply_action(SessionAction::Start), Ok(None));
        assert!(s.playable());
        assert_eq!(s.time_left_ms(), 60_000);
    }

    #[test]
    fn test_restart_resets_score_and_clock() {
        let mut s = session();
        s.tick(30_000);
        s.restart();
        assert_eq!(s.episode_id(), 1);
        assert_eq!(s.time_left_ms(), 60_000);
        assert!(s.playable());
        assert!(has_any_valid_move(s.engine().board()));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut s = session();
        s.begin_selection(Pos::new(2, 3)).unwrap();
        let snap = s.snapshot();

        assert_eq!(snap.size, 8);
        assert_eq!(snap.board.len(), 8);
        assert_eq!(snap.selection, vec![Pos::new(2, 3)]);
        assert_eq!(snap.time_left_ms, 60_000);
        assert!(snap.playable());
        assert_eq!(snap.rating, None);
    }
}
