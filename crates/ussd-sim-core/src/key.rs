//! Key event types for dialer input handling.

use serde::{Deserialize, Serialize};

use crate::dial::is_dial_symbol;
use crate::{Error, Result};

/// A discrete key event fed into the simulator.
///
/// Events may originate from a physical keyboard listener or from an
/// on-screen keypad control; both surfaces produce the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEvent {
    /// A dial symbol key: `0`-`9`, `*` or `#`
    Symbol(char),
    /// Delete key, removes the last composed symbol
    Backspace,
    /// Confirm key (Enter / call button), commits the buffer or sends a reply
    Confirm,
    /// Cancel key (Escape / hang-up button), ends the current session
    Cancel,
}

impl KeyEvent {
    /// Parse a key event from its string representation.
    ///
    /// Examples:
    /// - "5" -> KeyEvent::Symbol('5')
    /// - "*" -> KeyEvent::Symbol('*')
    /// - "Enter" -> KeyEvent::Confirm
    /// - "Escape" -> KeyEvent::Cancel
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s {
            "Enter" | "Return" | "Call" => Ok(KeyEvent::Confirm),
            "Escape" | "Esc" | "Cancel" => Ok(KeyEvent::Cancel),
            "Backspace" | "Delete" | "Del" => Ok(KeyEvent::Backspace),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if is_dial_symbol(ch) => Ok(KeyEvent::Symbol(ch)),
                    _ => Err(Error::InvalidKey(s.to_string())),
                }
            }
        }
    }
}

impl std::fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyEvent::Symbol(c) => write!(f, "{c}"),
            KeyEvent::Backspace => write!(f, "Backspace"),
            KeyEvent::Confirm => write!(f, "Enter"),
            KeyEvent::Cancel => write!(f, "Escape"),
        }
    }
}
