//! Key-event routing for the dialer and reply-field surfaces.

use ussd_sim_core::KeyEvent;

/// Which surface currently holds device focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The dialer screen; no text field is focused
    Dialer,
    /// The reply field inside the session modal
    ReplyField,
}

/// The action a key event maps to, given the focus and session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Append a symbol to the dial buffer
    Append(char),
    /// Remove the last symbol from the dial buffer
    Backspace,
    /// Commit the dial buffer and open a session
    Commit,
    /// Send the reply field's content as the next turn
    SendReply,
    /// Cancel the active session
    Cancel,
    /// Let the focused field's own text entry apply; not intercepted
    Passthrough,
    /// No meaning in the current state
    Ignored,
}

/// Route a key event to its action.
///
/// Pure routing table, decoupled from any rendering surface: the same
/// function serves a physical-keyboard listener and an on-screen keypad.
/// Symbol and delete keys only reach the dial buffer while no session is
/// active; once the reply field holds focus its own text entry applies.
pub fn route(key: KeyEvent, focus: Focus, session_active: bool) -> InputAction {
    match (key, focus, session_active) {
        (KeyEvent::Symbol(c), Focus::Dialer, false) => InputAction::Append(c),
        (KeyEvent::Symbol(_), Focus::ReplyField, true) => InputAction::Passthrough,
        (KeyEvent::Backspace, Focus::Dialer, false) => InputAction::Backspace,
        (KeyEvent::Backspace, Focus::ReplyField, true) => InputAction::Passthrough,
        (KeyEvent::Confirm, Focus::Dialer, false) => InputAction::Commit,
        (KeyEvent::Confirm, Focus::ReplyField, true) => InputAction::SendReply,
        (KeyEvent::Cancel, _, true) => InputAction::Cancel,
        _ => InputAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_append_while_dialing() {
        assert_eq!(
            route(KeyEvent::Symbol('5'), Focus::Dialer, false),
            InputAction::Append('5')
        );
        assert_eq!(
            route(KeyEvent::Symbol('*'), Focus::Dialer, false),
            InputAction::Append('*')
        );
    }

    #[test]
    fn test_symbols_pass_through_to_reply_field() {
        assert_eq!(
            route(KeyEvent::Symbol('1'), Focus::ReplyField, true),
            InputAction::Passthrough
        );
        assert_eq!(
            route(KeyEvent::Backspace, Focus::ReplyField, true),
            InputAction::Passthrough
        );
    }

    #[test]
    fn test_symbols_ignored_on_dialer_during_session() {
        assert_eq!(
            route(KeyEvent::Symbol('1'), Focus::Dialer, true),
            InputAction::Ignored
        );
        assert_eq!(
            route(KeyEvent::Backspace, Focus::Dialer, true),
            InputAction::Ignored
        );
    }

    #[test]
    fn test_confirm_commits_or_sends() {
        assert_eq!(
            route(KeyEvent::Confirm, Focus::Dialer, false),
            InputAction::Commit
        );
        assert_eq!(
            route(KeyEvent::Confirm, Focus::ReplyField, true),
            InputAction::SendReply
        );
    }

    #[test]
    fn test_cancel_requires_active_session() {
        assert_eq!(
            route(KeyEvent::Cancel, Focus::ReplyField, true),
            InputAction::Cancel
        );
        assert_eq!(
            route(KeyEvent::Cancel, Focus::Dialer, true),
            InputAction::Cancel
        );
        assert_eq!(
            route(KeyEvent::Cancel, Focus::Dialer, false),
            InputAction::Ignored
        );
    }
}
