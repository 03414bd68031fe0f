//! Headless autoplay: drives a session with the chain planner and writes
//! JSON lines.
//!
//! Each harvest produces one `{"type":"commit",...}` line and the run ends
//! with one `{"type":"summary",...}` line.
//!
//! # Environment Variables
//!
//! [`RunnerConfig::from_env`] reads:
//!
//! - `HARVEST_MOVE_MS`: logical milliseconds each move takes (default: 1500)
//! - `HARVEST_MAX_MOVES`: stop after this many harvests (default: 500)

use std::io::Write;

use anyhow::{Context, Result};
use log::warn;
use serde::Serialize;

use crate::core::{BoardGenerator, RandomSource, Session};
use crate::engine::{apply_plan, PlanError};
use crate::types::{ChainTier, HarvestRating, Pos};

pub const DEFAULT_MOVE_MS: u32 = 1500;
pub const DEFAULT_MAX_MOVES: u32 = 500;

/// One output line
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Record<'a> {
    Commit {
        move_index: u32,
        removed: &'a [Pos],
        score_delta: u32,
        tier: ChainTier,
        reshuffled: bool,
        score: u32,
        time_left_ms: u32,
    },
    Summary {
        seed: u32,
        board_size: usize,
        palette_size: u8,
        score: u32,
        moves: u32,
        reshuffles: u32,
        rating: HarvestRating,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Logical time each move takes; never zero
    pub move_ms: u32,
    pub max_moves: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            move_ms: DEFAULT_MOVE_MS,
            max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        fn env_u32(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        }

        Self {
            move_ms: env_u32("HARVEST_MOVE_MS", DEFAULT_MOVE_MS).max(1),
            max_moves: env_u32("HARVEST_MAX_MOVES", DEFAULT_MAX_MOVES),
        }
    }
}

fn write_line<W: Write>(out: &mut W, record: &Record<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, record).context("failed to write record")?;
    writeln!(out)?;
    Ok(())
}

/// Play `session` until time runs out or `max_moves` harvests are made,
/// then write the summary line.
pub fn run<R, G, W>(session: &mut Session<R, G>, config: RunnerConfig, out: &mut W) -> Result<()>
where
    R: RandomSource,
    G: BoardGenerator,
    W: Write,
{
    session.start();

    while session.playable() && session.moves() < config.max_moves {
        let outcome = match apply_plan(session) {
            Ok(outcome) => outcome,
            Err(PlanError::NoMove) => {
                // The engine keeps a move on the board; this only trips if that breaks.
                warn!("planner found no chain; ending session early");
                break;
            }
            Err(err) => {
                anyhow::bail!("planner failed: {} ({})", err.message(), err.code());
            }
        };

        write_line(
            out,
            &Record::Commit {
                move_index: session.moves(),
                removed: &outcome.removed,
                score_delta: outcome.score_delta,
                tier: outcome.tier,
                reshuffled: outcome.reshuffled,
                score: session.score(),
                time_left_ms: session.time_left_ms(),
            },
        )?;

        session.tick(config.move_ms);
    }

    let engine = session.engine();
    write_line(
        out,
        &Record::Summary {
            seed: engine.config().seed,
            board_size: engine.size(),
            palette_size: engine.palette().size(),
            score: session.score(),
            moves: session.moves(),
            reshuffles: engine.reshuffle_count(),
            rating: session.rating(),
        },
    )?;
    out.flush()?;
    Ok(())
}
