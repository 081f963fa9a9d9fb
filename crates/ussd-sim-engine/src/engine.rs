//! The single-session turn-based state machine.

use tracing::{debug, info, warn};

use ussd_sim_client::Gateway;
use ussd_sim_core::{
    DialBuffer, DialCode, KeyEvent, Result, Session, SessionId, SimulatorConfig, TurnRequest,
    TurnResponse,
};

use crate::input::{route, Focus, InputAction};
use crate::ui::UiState;

/// Fixed message rendered when a turn fails at the transport level.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error.\nPlease try again later.";

/// Lifecycle phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active session; the dialer is composing
    Idle,
    /// Commit validated, opening turn in flight
    Opening,
    /// Last turn kept the session open; awaiting the user's reply
    Interactive,
    /// Terminal response or transport error shown; teardown pending
    Closing,
}

/// The USSD dialer session engine.
///
/// Owns the whole engine state (dial buffer, optional session, waiting
/// flag) and is driven by method calls from a single task. Collaborators
/// read projections of the state via [`SessionEngine::ui`]; none mutate it
/// directly. The only suspension point is the gateway call inside
/// [`commit`](SessionEngine::commit) and [`send`](SessionEngine::send).
#[derive(Debug)]
pub struct SessionEngine<G: Gateway> {
    config: SimulatorConfig,
    gateway: G,
    dial: DialBuffer,
    session: Option<Session>,
    phase: Phase,
    waiting: bool,
    message: Option<String>,
}

impl<G: Gateway> SessionEngine<G> {
    /// Create an idle engine with the given configuration and gateway.
    pub fn new(config: SimulatorConfig, gateway: G) -> Self {
        Self {
            config,
            gateway,
            dial: DialBuffer::new(),
            session: None,
            phase: Phase::Idle,
            waiting: false,
            message: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a turn request is outstanding.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Identifier of the live session, if any.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Current dial buffer contents.
    pub fn dial_value(&self) -> &str {
        self.dial.value()
    }

    /// The last display message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Project the engine state onto its UI regime.
    pub fn ui(&self) -> UiState {
        UiState::project(self.phase, self.waiting, self.dial.value(), self.message.as_deref())
    }

    /// Route a key event and apply its local effect.
    ///
    /// Buffer mutations and cancellation are applied immediately. `Commit`
    /// and `SendReply` are returned unapplied: they need the async gateway
    /// turn (and, for replies, the field's text), so the caller drives them
    /// through [`commit`](Self::commit) or [`send`](Self::send).
    pub fn handle_key(&mut self, key: KeyEvent, focus: Focus) -> InputAction {
        let action = route(key, focus, self.session.is_some());
        match action {
            InputAction::Append(symbol) => self.dial.append(symbol),
            InputAction::Backspace => self.dial.backspace(),
            InputAction::Cancel => self.cancel(),
            _ => {}
        }
        action
    }

    /// START: validate the dial buffer and open a session.
    ///
    /// Returns the opening [`TurnRequest`] to dispatch, `Ok(None)` when the
    /// attempt is suppressed (not idle, or a request is already in flight),
    /// or an error when the composed code fails validation - in which case
    /// the buffer is retained and no session opens.
    pub fn start(&mut self) -> Result<Option<TurnRequest>> {
        if self.phase != Phase::Idle || self.waiting {
            debug!("Suppressing start: phase={:?}, waiting={}", self.phase, self.waiting);
            return Ok(None);
        }

        let code = DialCode::parse(self.dial.value())?;
        self.dial.clear();

        let session = Session::open(code);
        info!("Session opened: id={}, code={}", session.id, session.code);
        self.session = Some(session);
        self.phase = Phase::Opening;
        self.message = None;

        Ok(self.begin_turn(""))
    }

    /// SEND: issue a reply turn for the interactive session.
    ///
    /// Returns the [`TurnRequest`] to dispatch, or `None` when suppressed
    /// (no interactive session, or a request is already in flight - the
    /// single-flight guard).
    pub fn reply(&mut self, text: &str) -> Option<TurnRequest> {
        if self.phase != Phase::Interactive {
            debug!("Suppressing reply: phase={:?}", self.phase);
            return None;
        }
        self.begin_turn(text)
    }

    /// TURN_RESULT / TRANSPORT_ERROR: apply the outcome of a dispatched turn.
    ///
    /// The result is keyed by the session it was issued for; anything
    /// arriving for a cancelled or superseded session is discarded silently.
    pub fn apply_result(&mut self, session_id: SessionId, result: Result<TurnResponse>) {
        let Some(session) = &self.session else {
            debug!("Discarding turn result for inactive session {session_id}");
            return;
        };
        if session.id != session_id {
            debug!(
                "Discarding stale turn result: got {session_id}, live session is {}",
                session.id
            );
            return;
        }

        self.waiting = false;
        match result {
            Ok(response) => {
                if response.continue_session {
                    debug!("Turn kept session {session_id} open");
                    self.phase = Phase::Interactive;
                } else {
                    info!("Terminal response for session {session_id}");
                    self.phase = Phase::Closing;
                }
                self.message = Some(response.message);
            }
            Err(err) => {
                warn!("Transport error for session {session_id}: {err}");
                self.message = Some(CONNECTION_ERROR_MESSAGE.to_string());
                self.phase = Phase::Closing;
            }
        }
    }

    /// CANCEL: end the session locally, without notifying the gateway.
    ///
    /// Applies from the interactive and closing phases; a response that
    /// later arrives for the discarded session is ignored by
    /// [`apply_result`](Self::apply_result)'s identity check.
    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Interactive | Phase::Closing) {
            if let Some(session) = &self.session {
                info!("Session cancelled locally: id={}", session.id);
            }
            self.reset();
        }
    }

    /// TEARDOWN: close out a terminal session.
    ///
    /// Fired by the UI's auto-close timer or its acknowledgement control.
    /// Idempotent: a second call is a no-op.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Closing {
            if let Some(session) = &self.session {
                info!("Session closed: id={}", session.id);
            }
            self.reset();
        }
    }

    /// Drive START through the gateway: open the session and resolve the
    /// opening turn. Transport failures are absorbed into the closing
    /// phase, not returned; the only error is local dial-code validation.
    pub async fn commit(&mut self) -> Result<()> {
        if let Some(request) = self.start()? {
            self.dispatch(request).await;
        }
        Ok(())
    }

    /// Drive SEND through the gateway: issue the reply and resolve it.
    /// A suppressed attempt is a silent no-op.
    pub async fn send(&mut self, text: &str) {
        if let Some(request) = self.reply(text) {
            self.dispatch(request).await;
        }
    }

    /// Guard and build one turn request: the single-flight invariant lives
    /// here. At most one request may be outstanding at any time.
    fn begin_turn(&mut self, text: &str) -> Option<TurnRequest> {
        if self.waiting {
            debug!("Suppressing turn: request already in flight");
            return None;
        }
        let session = self.session.as_ref()?;
        self.waiting = true;
        Some(TurnRequest {
            session_id: session.id,
            phone_number: self.config.subscriber.phone_number.clone(),
            ussd_code: session.code.clone(),
            text: text.to_string(),
        })
    }

    async fn dispatch(&mut self, request: TurnRequest) {
        let session_id = request.session_id;
        let result = self.gateway.send_turn(&request).await;
        self.apply_result(session_id, result);
    }

    fn reset(&mut self) {
        self.session = None;
        self.phase = Phase::Idle;
        self.waiting = false;
        self.message = None;
        self.dial.clear();
    }
}
