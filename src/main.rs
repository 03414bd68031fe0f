//! Headless lavender harvest runner (default binary).
//!
//! Plays one seeded session with the chain planner and writes JSON lines to
//! stdout (see [`lavender_harvest::runner`]). Engine settings come from
//! `HARVEST_*` environment variables (see `EngineConfig::from_env`); logging
//! is controlled with `RUST_LOG`.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use log::info;

use lavender_harvest::core::{EngineConfig, Session};
use lavender_harvest::runner::{self, RunnerConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = EngineConfig::from_env();
    let runner_config = RunnerConfig::from_env();

    let mut session = Session::new(config).context("invalid engine configuration")?;
    info!(
        "starting {}x{} session with {} tags (seed {})",
        config.board_size, config.board_size, config.palette_size, config.seed
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    runner::run(&mut session, runner_config, &mut out)
}
