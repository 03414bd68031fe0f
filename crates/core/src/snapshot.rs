use serde::Serialize;

use crate::types::{HarvestRating, Pos};

/// Plain-data view of a session for presentation layers.
///
/// `board[row][col]` holds the raw tag value of each cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub size: usize,
    pub palette_size: u8,
    pub board: Vec<Vec<u8>>,
    pub selection: Vec<Pos>,
    pub episode_id: u32,
    pub score: u32,
    pub moves: u32,
    pub reshuffles: u32,
    pub time_left_ms: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    /// Set once the game is over
    pub rating: Option<HarvestRating>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.palette_size = 0;
        self.board.clear();
        self.selection.clear();
        self.episode_id = 0;
        self.score = 0;
        self.moves = 0;
        self.reshuffles = 0;
        self.time_left_ms = 0;
        self.started = false;
        self.paused = false;
        self.game_over = false;
        self.rating = None;
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }
}
