//! Selection module - player-traced chains
//!
//! A selection is the path a player drags across the board. It only grows
//! through cells that continue the path: orthogonally adjacent to the last
//! cell, same tag, not visited before. Unlike a region, a committed
//! selection removes exactly the traced cells.

use serde::Serialize;

use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Pos, Tag, MIN_MATCH_LEN};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    cells: Vec<Pos>,
    tag: Option<Tag>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a selection at `pos`.
    pub fn start(board: &Board, pos: Pos) -> Result<Self, EngineError> {
        let mut selection = Self::new();
        selection.extend(board, pos)?;
        Ok(selection)
    }

    /// Try to append `pos`. On error the selection is unchanged.
    pub fn extend(&mut self, board: &Board, pos: Pos) -> Result<(), EngineError> {
        let cell = board.get(pos).ok_or(EngineError::InvalidCoordinate {
            row: pos.row,
            col: pos.col,
        })?;
        let tag = cell.ok_or(EngineError::EmptyCell {
            row: pos.row,
            col: pos.col,
        })?;

        let Some(&last) = self.cells.last() else {
            self.cells.push(pos);
            self.tag = Some(tag);
            return Ok(());
        };

        if !last.is_adjacent(pos) {
            return Err(EngineError::NonAdjacentExtension);
        }
        if self.tag != Some(tag) {
            return Err(EngineError::TagMismatch);
        }
        if self.contains(pos) {
            return Err(EngineError::DuplicateCoordinate);
        }

        self.cells.push(pos);
        Ok(())
    }

    /// Check every traced cell still holds the selection tag on `board`.
    pub fn validate(&self, board: &Board) -> Result<(), EngineError> {
        for &pos in &self.cells {
            let cell = board.get(pos).ok_or(EngineError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
            })?;
            if cell != self.tag {
                return Err(EngineError::TagMismatch);
            }
        }
        Ok(())
    }

    pub fn is_committable(&self) -> bool {
        self.cells.len() >= MIN_MATCH_LEN
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    pub fn last(&self) -> Option<Pos> {
        self.cells.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.tag = None;
    }
}
