//! In-memory gateway replaying programmed turn results.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use ussd_sim_core::{Error, Result, TurnRequest, TurnResponse};

use crate::gateway::Gateway;

/// A gateway that answers turns from a programmed queue of results.
///
/// Used by engine tests and local runs without a live backend. Each
/// `send_turn` pops the next queued result and bumps the call counter, so
/// tests can assert both the conversation flow and the exact number of
/// requests issued. An exhausted queue answers with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    script: Mutex<VecDeque<Result<TurnResponse>>>,
    calls: AtomicUsize,
}

impl ScriptedGateway {
    /// Create a gateway with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful turn response.
    pub fn push_response(&self, message: impl Into<String>, continue_session: bool) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(TurnResponse {
                message: message.into(),
                continue_session,
            }));
    }

    /// Queue a failed turn.
    pub fn push_error(&self, error: Error) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Number of turns dispatched so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn send_turn(&self, _request: &TurnRequest) -> Result<TurnResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("scripted gateway exhausted".to_string())))
    }
}
