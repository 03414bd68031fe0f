//! Lavender Harvest (workspace facade crate).
//!
//! This package exposes `lavender_harvest::{core,engine,types}` while the
//! implementation lives in dedicated crates under `crates/`. [`runner`] holds
//! the headless autoplay loop used by the binary.

pub use lavender_harvest_core as core;
pub use lavender_harvest_engine as engine;
pub use lavender_harvest_types as types;

pub mod runner;
