//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    /// Throw the session away and start a new one
    Restart,
}

/// Map a key press to an action, `None` for unbound keys.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    let command = match key.code {
        KeyCode::Left | KeyCode::Char('h') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => Command::MoveRight,
        KeyCode::Down | KeyCode::Char('j') => Command::SoftDrop,
        KeyCode::Char(' ') => Command::HardDrop,

        KeyCode::Char('z') | KeyCode::Char('Z') => Command::RotateLeft,
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('k') => {
            Command::RotateRight
        }

        KeyCode::Char('r') | KeyCode::Char('R') => return Some(KeyAction::Restart),
        _ => return None,
    };
    Some(KeyAction::Command(command))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
