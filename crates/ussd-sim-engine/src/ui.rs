//! Projection of engine state onto UI regimes.

use std::time::Duration;

use crate::engine::Phase;

/// Delay before a terminal session closes itself when the surface offers no
/// acknowledgement control.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(3500);

/// Advisory delay before focusing the reply field, so focus lands after the
/// modal's entry animation. Not part of the state machine contract.
pub const REPLY_FOCUS_DELAY: Duration = Duration::from_millis(300);

/// The four mutually exclusive visual regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Composing a dial code; modal hidden
    Dialing,
    /// A turn request is outstanding; spinner shown, controls disabled
    Loading,
    /// Awaiting the user's reply; reply field enabled and focused
    Interactive,
    /// Terminal message shown; acknowledgement or auto-close pending
    Terminal,
}

/// What a rendering surface needs to draw one frame of the simulator.
///
/// Purely derived from engine state; rendering layers read it and never
/// mutate the engine directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Active visual regime
    pub regime: Regime,
    /// Whether the session modal is shown
    pub modal_visible: bool,
    /// Dial buffer contents for the dialer display
    pub dial_display: String,
    /// Message to render inside the modal, if any
    pub message: Option<String>,
    /// Whether the reply field and send control are shown
    pub reply_visible: bool,
    /// Whether the reply field accepts input
    pub reply_enabled: bool,
    /// Whether the reply field should hold device focus
    pub reply_focused: bool,
    /// Arm an auto-close timer with this delay, when set
    pub auto_close_after: Option<Duration>,
}

impl UiState {
    /// Map engine state to its visual regime.
    pub(crate) fn project(
        phase: Phase,
        waiting: bool,
        dial_value: &str,
        message: Option<&str>,
    ) -> Self {
        let regime = match phase {
            Phase::Idle => Regime::Dialing,
            Phase::Opening => Regime::Loading,
            Phase::Interactive if waiting => Regime::Loading,
            Phase::Interactive => Regime::Interactive,
            Phase::Closing => Regime::Terminal,
        };

        Self {
            regime,
            modal_visible: regime != Regime::Dialing,
            dial_display: dial_value.to_string(),
            message: message.map(str::to_string),
            reply_visible: matches!(regime, Regime::Loading | Regime::Interactive),
            reply_enabled: regime == Regime::Interactive,
            reply_focused: regime == Regime::Interactive,
            auto_close_after: (regime == Regime::Terminal).then_some(AUTO_CLOSE_DELAY),
        }
    }
}
