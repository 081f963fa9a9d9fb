//! # ussd-sim-core
//!
//! Core types for the USSD session simulator.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other ussd-sim crates. It provides:
//!
//! - Key event types for dialer input handling
//! - Dial buffer and dial-code grammar
//! - Session identity and lifecycle types
//! - Wire DTOs for the gateway turn exchange
//! - Configuration types
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other ussd-sim crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all modules
pub mod config;
pub mod dial;
pub mod error;
pub mod key;
pub mod protocol;
pub mod session;

// Re-export commonly used types
pub use config::{GatewaySettings, SimulatorConfig, SubscriberSettings};
pub use dial::{DialBuffer, DialCode, DIAL_BUFFER_CAPACITY};
pub use error::{Error, Result};
pub use key::KeyEvent;
pub use protocol::{TurnRequest, TurnResponse};
pub use session::{Session, SessionId};
