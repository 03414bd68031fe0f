//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, session, planner, presentation layers).
//!
//! # Board Geometry
//!
//! The board is a square grid addressed as `(row, col)`:
//!
//! - **Row 0** is the top row; cells fall toward larger row indices
//! - **Col 0** is the leftmost column
//! - Default size is 8x8
//!
//! # Engine Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 8 | Rows and columns of a new board |
//! | `DEFAULT_PALETTE_SIZE` | 4 | Number of distinct lavender tags |
//! | `MIN_MATCH_LEN` | 3 | Smallest region/chain that counts as a match |
//! | `RESHUFFLE_ATTEMPTS` | 10 | Extra regenerations before the forced fix |
//! | `GENERATE_PASS_LIMIT` | 1000 | Bound on match-stripping scans |
//! | `SESSION_TIME_MS` | 60000 | Length of a timed session |
//!
//! # Examples
//!
//! ```
//! use lavender_harvest_types::{Palette, Pos, Tag};
//!
//! let palette = Palette::new(4).unwrap();
//! assert!(palette.contains(Tag(3)));
//! assert!(!palette.contains(Tag(4)));
//!
//! assert!(Pos::new(2, 3).is_adjacent(Pos::new(2, 4)));
//! assert!(!Pos::new(2, 3).is_adjacent(Pos::new(3, 4)));
//! ```

use serde::{Deserialize, Serialize};

/// Rows and columns of a default board (8x8)
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Number of distinct tags in the default palette
pub const DEFAULT_PALETTE_SIZE: u8 = 4;

/// Smallest board that still fits a straight run of three
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board
pub const MAX_BOARD_SIZE: usize = 64;

/// Smallest palette the generator can strip matches from
pub const MIN_PALETTE_SIZE: u8 = 2;

/// Largest supported palette
pub const MAX_PALETTE_SIZE: u8 = 16;

/// Minimum region size (and traced chain length) that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Regenerations attempted after the first one before forcing a move
pub const RESHUFFLE_ATTEMPTS: u32 = 10;

/// Upper bound on full-board re-roll scans during generation
pub const GENERATE_PASS_LIMIT: u32 = 1000;

/// Base points per harvested cell
pub const BASE_CELL_SCORE: u32 = 10;

/// Cap on the combo multiplier step (`len - 2`)
pub const MAX_COMBO_STEP: u32 = 5;

/// Length of a timed session in milliseconds (60 seconds)
pub const SESSION_TIME_MS: u32 = 60_000;

/// One lavender variety. The value indexes into the [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub u8);

impl Tag {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board cell: `Some(tag)` or `None` while a collapse is in progress.
pub type Cell = Option<Tag>;

/// Board coordinate, row-major with row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is one step up, down, left or right of `self`.
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self.row.abs_diff(other.row) == 1 && self.col == other.col)
            || (self.col.abs_diff(other.col) == 1 && self.row == other.row)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The fixed set of tags a game draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    size: u8,
}

impl Palette {
    /// Create a palette of `size` tags. Returns `None` outside
    /// `MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE`.
    pub fn new(size: u8) -> Option<Self> {
        if (MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
            Some(Self { size })
        } else {
            None
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, tag: Tag) -> bool {
        tag.0 < self.size
    }

    /// Tag for a raw draw in `[0, size)`.
    pub fn tag(&self, index: u32) -> Tag {
        Tag((index % self.size as u32) as u8)
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> {
        (0..self.size).map(Tag)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            size: DEFAULT_PALETTE_SIZE,
        }
    }
}

/// Feedback tier for a harvested chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChainTier {
    /// Exactly three cells
    Connections,
    /// Four cells
    Combo,
    /// Five or more cells
    MegaCombo,
}

impl ChainTier {
    /// Tier for a chain of `len` cells. Lengths below three have no tier.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            0..=2 => None,
            3 => Some(ChainTier::Connections),
            4 => Some(ChainTier::Combo),
            _ => Some(ChainTier::MegaCombo),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainTier::Connections => "connections",
            ChainTier::Combo => "combo",
            ChainTier::MegaCombo => "megaCombo",
        }
    }
}

/// End-of-session rating derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarvestRating {
    KeepTrying,
    Decent,
    Good,
    Excellent,
}

impl HarvestRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            1000.. => HarvestRating::Excellent,
            500..=999 => HarvestRating::Good,
            200..=499 => HarvestRating::Decent,
            _ => HarvestRating::KeepTrying,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HarvestRating::KeepTrying => "keepTrying",
            HarvestRating::Decent => "decent",
            HarvestRating::Good => "good",
            HarvestRating::Excellent => "excellent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_constants() {
        assert_eq!(DEFAULT_BOARD_SIZE, 8);
        assert_eq!(DEFAULT_PALETTE_SIZE, 4);
        assert_eq!(MIN_MATCH_LEN, 3);
        assert_eq!(RESHUFFLE_ATTEMPTS, 10);
        assert_eq!(SESSION_TIME_MS, 60_000);
    }

    #[test]
    fn palette_bounds() {
        assert!(Palette::new(1).is_none());
        assert!(Palette::new(17).is_none());
        assert_eq!(Palette::new(2).map(|p| p.size()), Some(2));
        assert_eq!(Palette::default().tags().count(), 4);
    }

    #[test]
    fn palette_tag_wraps_raw_draw() {
        let palette = Palette::new(4).unwrap();
        assert_eq!(palette.tag(0), Tag(0));
        assert_eq!(palette.tag(7), Tag(3));
    }

    #[test]
    fn adjacency_is_four_directional() {
        let p = Pos::new(4, 4);
        assert!(p.is_adjacent(Pos::new(3, 4)));
        assert!(p.is_adjacent(Pos::new(5, 4)));
        assert!(p.is_adjacent(Pos::new(4, 3)));
        assert!(p.is_adjacent(Pos::new(4, 5)));

        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Pos::new(5, 5)));
        assert!(!p.is_adjacent(Pos::new(4, 6)));
    }

    #[test]
    fn chain_tiers() {
        assert_eq!(ChainTier::from_len(2), None);
        assert_eq!(ChainTier::from_len(3), Some(ChainTier::Connections));
        assert_eq!(ChainTier::from_len(4), Some(ChainTier::Combo));
        assert_eq!(ChainTier::from_len(9), Some(ChainTier::MegaCombo));
    }

    #[test]
    fn harvest_ratings() {
        assert_eq!(HarvestRating::from_score(0), HarvestRating::KeepTrying);
        assert_eq!(HarvestRating::from_score(199), HarvestRating::KeepTrying);
        assert_eq!(HarvestRating::from_score(200), HarvestRating::Decent);
        assert_eq!(HarvestRating::from_score(500), HarvestRating::Good);
        assert_eq!(HarvestRating::from_score(999), HarvestRating::Good);
        assert_eq!(HarvestRating::from_score(1000), HarvestRating::Excellent);
    }
}
