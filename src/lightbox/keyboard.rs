//! Keyboard protocol for the open lightbox.
//!
//! | Key          | Command    |
//! |--------------|------------|
//! | `Escape`     | close      |
//! | `ArrowLeft`  | previous   |
//! | `ArrowRight` | next       |
//!
//! Key names follow the browser's `KeyboardEvent.key` values. Anything else
//! is ignored.

use std::fmt;

/// A key press as reported by the hosting document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Escape => "Escape",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Other(name) => name,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a recognised key asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Previous,
    Next,
}

impl KeyCommand {
    pub fn for_key(key: &Key) -> Option<Self> {
        match key {
            Key::Escape => Some(KeyCommand::Close),
            Key::ArrowLeft => Some(KeyCommand::Previous),
            Key::ArrowRight => Some(KeyCommand::Next),
            Key::Other(_) => None,
        }
    }
}
