//! Core engine - pure, deterministic, and testable
//!
//! This crate holds every game rule: the shape catalog, piece movement and
//! collision, the grid with line clearing, gravity, locking and loss detection.
//! It has **no dependencies** on terminals, input devices or wall clocks:
//!
//! - **Deterministic**: randomness comes from an injected [`PieceSource`]
//! - **Testable**: time only advances through `update(elapsed_ms)`
//! - **Total**: out-of-range queries return `EMPTY`, illegal moves are no-ops
//!
//! # Module Structure
//!
//! - [`shapes`]: static catalog of the seven tetrominoes, four 4x4 masks each
//! - [`piece`]: a positioned, rotated shape with collision against a grid
//! - [`grid`]: the playfield of locked cells, bounds, locking and row clearing
//! - [`player`]: the falling piece, the lookahead piece, gravity and commands
//! - [`session`]: one grid plus one player, and the running/lost state
//! - [`rng`]: piece sources (uniform, 7-bag, scripted)
//! - [`config`]: grid size, gravity and randomizer settings
//!
//! # Example
//!
//! ```
//! use fallgrid_core::{EngineConfig, GameSession, SequenceSource};
//! use fallgrid_core::types::{Command, ShapeKind};
//!
//! let source = SequenceSource::new([ShapeKind::O, ShapeKind::T]).unwrap();
//! let mut session = GameSession::new(&EngineConfig::default(), source).unwrap();
//!
//! session.apply(Command::MoveLeft);
//! session.apply(Command::HardDrop);
//! session.update(16);
//!
//! assert!(session.is_running());
//! assert_eq!(session.grid().filled_count(), 4);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod piece;
pub mod player;
pub mod rng;
pub mod session;
pub mod shapes;

pub use fallgrid_types as types;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError};
pub use grid::Grid;
pub use piece::Piece;
pub use player::PlayerController;
pub use rng::{
    BagSource, PieceSource, Randomizer, RandomizerKind, SequenceSource, UniformSource,
};
pub use session::GameSession;
pub use shapes::{cell_at, shape, ShapeDef, CATALOG};
