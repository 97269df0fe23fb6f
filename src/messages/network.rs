//! Network messages - communication between App and Network layers

use crate::models::{Backend, GreetingResult, HealthStatus};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// GET the backend's hello route
    FetchGreeting { id: u64, backend: Backend },
    /// GET the backend's health route
    CheckHealth { id: u64, backend: Backend },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A greeting fetch settled (success or collapsed failure)
    Greeting {
        id: u64,
        backend: Backend,
        result: GreetingResult,
        time_ms: u64,
    },
    /// A health probe settled
    Health {
        id: u64,
        backend: Backend,
        status: HealthStatus,
    },
}
