//! Fallgrid (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration tests
//! and benches can write `fallgrid::core::GameSession` and friends.

pub mod cli;

pub use fallgrid_core as core;
pub use fallgrid_input as input;
pub use fallgrid_term as term;
pub use fallgrid_types as types;
