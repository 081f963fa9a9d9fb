//! Wire DTOs for the gateway turn exchange.
//!
//! One turn is a single request/response pair. The gateway contract is a
//! flat JSON object in both directions:
//!
//! - request: `{ sessionId, phoneNumber, ussdCode, text }`
//! - response: `{ message, continueSession }`

use serde::{Deserialize, Serialize};

use crate::dial::DialCode;
use crate::session::SessionId;

/// One turn request sent to the USSD gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    /// Session this turn belongs to
    pub session_id: SessionId,
    /// Subscriber identifier (MSISDN)
    pub phone_number: String,
    /// The dial code that opened the session
    pub ussd_code: DialCode,
    /// User reply text; empty on the opening turn
    pub text: String,
}

impl TurnRequest {
    /// Build the opening turn for a session (empty text).
    pub fn opening(session_id: SessionId, phone_number: String, ussd_code: DialCode) -> Self {
        Self {
            session_id,
            phone_number,
            ussd_code,
            text: String::new(),
        }
    }

    /// Whether this is the opening turn of the session.
    pub fn is_opening(&self) -> bool {
        self.text.is_empty()
    }
}

/// One turn response from the USSD gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    /// Text to display to the subscriber
    pub message: String,
    /// Whether the session stays open for further turns.
    ///
    /// A response missing this field is treated as terminal so the engine
    /// never waits forever on an ambiguous payload.
    #[serde(default)]
    pub continue_session: bool,
}

impl TurnResponse {
    /// Whether this response ends the session.
    pub fn is_terminal(&self) -> bool {
        !self.continue_session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TurnRequest {
        TurnRequest::opening(
            SessionId::new(),
            "+237650000001".to_string(),
            DialCode::parse("*126#").unwrap(),
        )
    }

    #[test]
    fn test_request_wire_field_names() {
        let json = serde_json::to_value(request()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("sessionId"));
        assert!(obj.contains_key("phoneNumber"));
        assert!(obj.contains_key("ussdCode"));
        assert!(obj.contains_key("text"));
        assert_eq!(obj.len(), 4);
    }

    #[test]
    fn test_opening_turn_has_empty_text() {
        let req = request();
        assert!(req.is_opening());
        assert_eq!(req.text, "");
    }

    #[test]
    fn test_response_round_trip() {
        let json = r#"{"message":"Menu:\n1. Balance","continueSession":true}"#;
        let resp: TurnResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message, "Menu:\n1. Balance");
        assert!(resp.continue_session);
        assert!(!resp.is_terminal());
    }

    #[test]
    fn test_missing_continue_flag_is_terminal() {
        let json = r#"{"message":"Goodbye"}"#;
        let resp: TurnResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_terminal());
    }

    #[test]
    fn test_terminal_response() {
        let resp = TurnResponse {
            message: "Thank you".to_string(),
            continue_session: false,
        };
        assert!(resp.is_terminal());
    }
}
