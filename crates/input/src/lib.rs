//! Terminal input module.
//!
//! Maps `crossterm` key events onto engine [`Command`](crate::types::Command)s
//! plus the few keys the loop driver handles itself (restart, quit). Holds no
//! state: one key press is at most one command.

pub mod map;

pub use fallgrid_types as types;

pub use map::{map_key, should_quit, KeyAction};
