//! Session identity for the dialer engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dial::DialCode;

/// Unique identifier for a USSD session, fresh per dial attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for SessionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live USSD session: its identity and the dial code that opened it.
///
/// At most one session is live per engine instance; the engine holds it
/// as `Option<Session>` and drops it on teardown or cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session identifier
    pub id: SessionId,
    /// The dial code that opened this session
    pub code: DialCode,
}

impl Session {
    /// Open a new session for a validated dial code.
    pub fn open(code: DialCode) -> Self {
        Self {
            id: SessionId::new(),
            code,
        }
    }
}
