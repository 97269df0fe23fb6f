use serde::Deserialize;

use crate::constants::{
    FASTAPI_FAILURE_TEXT, JAVA_HEALTH_PATH, JAVA_HELLO_PATH, PYTHON_HEALTH_PATH,
    PYTHON_HELLO_PATH, SPRING_FAILURE_TEXT,
};

/// A backend service sitting behind the gateway
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    SpringBoot,
    FastApi,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::SpringBoot, Backend::FastApi];

    pub fn name(&self) -> &'static str {
        match self {
            Backend::SpringBoot => "Spring Boot",
            Backend::FastApi => "FastAPI",
        }
    }

    pub fn hello_path(&self) -> &'static str {
        match self {
            Backend::SpringBoot => JAVA_HELLO_PATH,
            Backend::FastApi => PYTHON_HELLO_PATH,
        }
    }

    pub fn health_path(&self) -> &'static str {
        match self {
            Backend::SpringBoot => JAVA_HEALTH_PATH,
            Backend::FastApi => PYTHON_HEALTH_PATH,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Backend::SpringBoot => "Call Spring",
            Backend::FastApi => "Call FastAPI",
        }
    }

    /// Text displayed when a greeting fetch fails for any reason
    pub fn failure_text(&self) -> &'static str {
        match self {
            Backend::SpringBoot => SPRING_FAILURE_TEXT,
            Backend::FastApi => FASTAPI_FAILURE_TEXT,
        }
    }

    pub fn other(&self) -> Backend {
        match self {
            Backend::SpringBoot => Backend::FastApi,
            Backend::FastApi => Backend::SpringBoot,
        }
    }
}

/// Success body of a hello endpoint
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GreetingBody {
    pub message: String,
}

/// Outcome of a greeting fetch, already collapsed for display
#[derive(Clone, Debug, PartialEq)]
pub enum GreetingResult {
    Success { message: String },
    Failure { display_text: String },
}

impl GreetingResult {
    pub fn failure(backend: Backend) -> Self {
        GreetingResult::Failure {
            display_text: backend.failure_text().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            GreetingResult::Success { message } => message,
            GreetingResult::Failure { display_text } => display_text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GreetingResult::Success { .. })
    }
}

/// Result of probing a backend's health route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Checking,
    Up,
    Down,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "?",
            HealthStatus::Checking => "...",
            HealthStatus::Up => "UP",
            HealthStatus::Down => "DOWN",
        }
    }
}

/// Transient UI state for one backend
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GreetingSlot {
    /// Last settled text, empty while pending or before the first fetch
    pub text: String,
    pub pending: bool,
    /// Round trip of the last settled fetch
    pub elapsed_ms: Option<u64>,
    pub health: HealthStatus,
}

impl GreetingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Pending
    pub fn begin(&mut self) {
        self.pending = true;
        self.text.clear();
        self.elapsed_ms = None;
    }

    /// Pending -> Idle. Any settlement overwrites the text, so the last one wins.
    pub fn settle(&mut self, result: &GreetingResult, elapsed_ms: u64) {
        self.text = result.text().to_string();
        self.elapsed_ms = Some(elapsed_ms);
        self.pending = false;
    }
}
