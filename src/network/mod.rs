//! Network layer - HTTP calls to the backends through the gateway
//!
//! The Network actor receives fetch commands and sends back settled results.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::FetchError;
