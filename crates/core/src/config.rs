//! Engine configuration
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! width = 10
//! height = 20
//! fall_interval_ms = 200
//! seed = 42            # optional, omit for a random run
//! randomizer = "bag"   # "uniform" (default) or "bag"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::MAX_DIMENSION;
use crate::rng::RandomizerKind;
use crate::shapes::BOX_SIZE;
use crate::types::{FALL_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    /// Gravity: milliseconds per row
    pub fall_interval_ms: u32,
    /// Seed for the piece stream; `None` picks one at startup
    pub seed: Option<u64>,
    pub randomizer: RandomizerKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            fall_interval_ms: FALL_INTERVAL_MS,
            seed: None,
            randomizer: RandomizerKind::Uniform,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// The grid must fit a whole bounding box and gravity must tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_limits(self.width, self.height, self.fall_interval_ms)
    }
}

/// Limits shared by configs and sessions built on an existing grid
pub(crate) fn check_limits(width: u16, height: u16, fall_interval_ms: u32) -> Result<(), ConfigError> {
    let min = BOX_SIZE as u16;
    if !(min..=MAX_DIMENSION).contains(&width) {
        return Err(ConfigError::Invalid(format!(
            "width must be in {}..={}, got {}",
            min, MAX_DIMENSION, width
        )));
    }
    if !(min..=MAX_DIMENSION).contains(&height) {
        return Err(ConfigError::Invalid(format!(
            "height must be in {}..={}, got {}",
            min, MAX_DIMENSION, height
        )));
    }
    if fall_interval_ms == 0 {
        return Err(ConfigError::Invalid(
            "fall_interval_ms must be positive".to_string(),
        ));
    }
    Ok(())
}
