//! Scoring module - chain harvest points
//!
//! `score = 10 * len * (1 + min(len - 2, 5) * 0.5)`, evaluated in integers as
//! `10 * len + 5 * len * min(len - 2, 5)`. The result is always whole.

use crate::types::{BASE_CELL_SCORE, MAX_COMBO_STEP, MIN_MATCH_LEN};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct ChainScore {
    /// Points before the combo bonus (`10 * len`).
    pub base: u32,
    /// Combo step `min(len - 2, 5)`.
    pub combo_step: u32,
    pub total: u32,
}

/// Combo step for a chain of `len` cells, capped at five
pub fn combo_step(len: usize) -> u32 {
    (len.saturating_sub(2) as u32).min(MAX_COMBO_STEP)
}

/// Points for harvesting a chain of `len` cells. Chains shorter than three
/// score nothing.
pub fn chain_score(len: usize) -> u32 {
    score_chain(len).total
}

/// Full breakdown of [`chain_score`]
pub fn score_chain(len: usize) -> ChainScore {
    if len < MIN_MATCH_LEN {
        return ChainScore::default();
    }
    let len = len as u32;
    let base = BASE_CELL_SCORE.saturating_mul(len);
    let combo_step = combo_step(len as usize);
    // base * (1 + step / 2) == base + base * step / 2; base is a multiple of 10.
    let bonus = base.saturating_mul(combo_step) / 2;
    ChainScore {
        base,
        combo_step,
        total: base.saturating_add(bonus),
    }
}
