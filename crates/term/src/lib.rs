//! Terminal front-end.
//!
//! A thin rendering layer over the engine's query surface: [`GameView`] draws a
//! session into a [`FrameBuffer`] and [`TerminalRenderer`] flushes it to the
//! terminal through crossterm. Nothing here mutates the game.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fallgrid_core as core;
pub use fallgrid_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{attribute_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
