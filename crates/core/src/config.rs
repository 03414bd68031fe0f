//! Engine configuration
//!
//! # Environment Variables
//!
//! [`EngineConfig::from_env`] reads:
//!
//! - `HARVEST_BOARD_SIZE`: rows/columns of the board (default: 8)
//! - `HARVEST_PALETTE_SIZE`: number of tags (default: 4)
//! - `HARVEST_RESHUFFLE_ATTEMPTS`: regenerations before a forced move (default: 10)
//! - `HARVEST_TIME_LIMIT_MS`: session length (default: 60000)
//! - `HARVEST_SEED`: RNG seed (default: 1)
//!
//! Unset or unparsable values fall back to the defaults.

use crate::error::ConfigError;
use crate::types::{
    Palette, DEFAULT_BOARD_SIZE, DEFAULT_PALETTE_SIZE, GENERATE_PASS_LIMIT, MAX_BOARD_SIZE,
    MAX_PALETTE_SIZE, MIN_BOARD_SIZE, MIN_PALETTE_SIZE, RESHUFFLE_ATTEMPTS, SESSION_TIME_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub palette_size: u8,
    /// Regenerations after the first one before the forced fix
    pub reshuffle_attempts: u32,
    pub generate_pass_limit: u32,
    pub time_limit_ms: u32,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            palette_size: DEFAULT_PALETTE_SIZE,
            reshuffle_attempts: RESHUFFLE_ATTEMPTS,
            generate_pass_limit: GENERATE_PASS_LIMIT,
            time_limit_ms: SESSION_TIME_MS,
            seed: 1,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a different board and palette size
    pub fn with_size(board_size: usize, palette_size: u8) -> Self {
        Self {
            board_size,
            palette_size,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            board_size: parsed("HARVEST_BOARD_SIZE").unwrap_or(defaults.board_size),
            palette_size: parsed("HARVEST_PALETTE_SIZE").unwrap_or(defaults.palette_size),
            reshuffle_attempts: parsed("HARVEST_RESHUFFLE_ATTEMPTS")
                .unwrap_or(defaults.reshuffle_attempts),
            generate_pass_limit: defaults.generate_pass_limit,
            time_limit_ms: parsed("HARVEST_TIME_LIMIT_MS").unwrap_or(defaults.time_limit_ms),
            seed: parsed("HARVEST_SEED").unwrap_or(defaults.seed),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {}..={}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&self.palette_size) {
            return Err(ConfigError::Validation(format!(
                "palette_size must be in {}..={}, got {}",
                MIN_PALETTE_SIZE, MAX_PALETTE_SIZE, self.palette_size
            )));
        }
        if self.generate_pass_limit == 0 {
            return Err(ConfigError::Validation(
                "generate_pass_limit must be > 0".into(),
            ));
        }
        if self.time_limit_ms == 0 {
            return Err(ConfigError::Validation("time_limit_ms must be > 0".into()));
        }
        Ok(())
    }

    /// The validated palette
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        self.validate()?;
        Palette::new(self.palette_size).ok_or_else(|| {
            ConfigError::Validation(format!("invalid palette size {}", self.palette_size))
        })
    }
}
