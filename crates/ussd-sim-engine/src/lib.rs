//! # ussd-sim-engine
//!
//! Session controller state machine for the USSD session simulator.
//!
//! This crate provides:
//! - Key-event routing from dialer and reply-field surfaces
//! - The single-session turn-based state machine
//! - The single-flight guard against concurrent turn requests
//! - Projection of engine state onto UI regimes
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on ussd-sim-core for
//! types and drives the gateway through ussd-sim-client's `Gateway` trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod input;
pub mod ui;

// Re-export commonly used types
pub use engine::{Phase, SessionEngine, CONNECTION_ERROR_MESSAGE};
pub use input::{route, Focus, InputAction};
pub use ui::{Regime, UiState, AUTO_CLOSE_DELAY, REPLY_FOCUS_DELAY};
