//! Error types for engine construction
//!
//! Gameplay itself never fails: rejected moves are no-ops and losing is a state
//! transition. These errors only come from building a session or its inputs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("grid picture has no rows")]
    EmptyGrid,

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized cell {ch:?} at ({x}, {y})")]
    BadCell { ch: char, x: usize, y: usize },

    #[error("grid of {width}x{height} exceeds the maximum size")]
    GridTooLarge { width: usize, height: usize },

    #[error("piece sequence is empty")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, EngineError>;
