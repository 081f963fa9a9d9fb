//! # ussd-sim-client
//!
//! Gateway protocol client for the USSD session simulator.
//!
//! This crate provides:
//! - The [`Gateway`] trait, the seam between the session engine and the
//!   remote USSD gateway
//! - [`HttpGateway`], the production client posting JSON turns over HTTP
//! - [`ScriptedGateway`], an in-memory gateway replaying programmed results
//!   for tests and local runs
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on ussd-sim-core and is
//! consumed by ussd-sim-engine through the `Gateway` trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gateway;
pub mod scripted;

// Re-export commonly used types
pub use gateway::{Gateway, HttpGateway};
pub use scripted::ScriptedGateway;
