//! # Hello Gateway
//!
//! A terminal frontend for a microservices demo: two buttons, each calling a
//! different backend through a gateway that routes by path prefix.
//!
//! ## Features
//! - "Call Spring" → `GET /api/java/hello`
//! - "Call FastAPI" → `GET /api/python/hello`
//! - Health probes for both backends
//! - Fixed, backend-specific failure text; diagnostics go to the log file
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use models::{Backend, GreetingResult, GreetingSlot, HealthStatus};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{FetchError, NetworkActor};
