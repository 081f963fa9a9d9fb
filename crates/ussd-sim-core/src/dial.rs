//! Dial buffer and dial-code grammar.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum number of symbols a dial buffer may hold.
pub const DIAL_BUFFER_CAPACITY: usize = 20;

/// Whether a character belongs to the dialer symbol set `{0-9, *, #}`.
pub fn is_dial_symbol(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '*' || ch == '#'
}

/// The composed-but-uncommitted dial string.
///
/// Holds at most [`DIAL_BUFFER_CAPACITY`] symbols, each drawn from
/// `{0-9, *, #}`. Over-length appends and foreign symbols are dropped
/// silently, matching feature-phone dialer behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialBuffer {
    symbols: String,
}

impl DialBuffer {
    /// Create an empty dial buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symbol, ignoring it if the buffer is full or the symbol is
    /// outside the allowed set.
    pub fn append(&mut self, symbol: char) {
        if self.symbols.len() >= DIAL_BUFFER_CAPACITY || !is_dial_symbol(symbol) {
            return;
        }
        self.symbols.push(symbol);
    }

    /// Remove the last symbol, if any.
    pub fn backspace(&mut self) {
        self.symbols.pop();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    /// Current contents, for display and validation.
    pub fn value(&self) -> &str {
        &self.symbols
    }

    /// Whether the buffer holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of symbols currently held.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}

/// A validated dial code, e.g. `*126#`.
///
/// Grammar: the code must contain at least one `*` and end with `#`. This is
/// the permissive rule; confirm against the actual gateway's accepted code
/// grammar before production use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialCode(String);

impl DialCode {
    /// Validate a raw dial string into a `DialCode`.
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.contains('*') || !raw.ends_with('#') {
            return Err(Error::InvalidDialCode(raw.to_string()));
        }
        if !raw.chars().all(is_dial_symbol) {
            return Err(Error::InvalidDialCode(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The validated code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DialCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
