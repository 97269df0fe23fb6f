//! Application constants
//!
//! Centralized location for routes, labels and fixed user-facing text.

/// Gateway used when no config file or env override is present
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080";

/// Log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "hello-gateway.log";

/// Config directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".hello-gateway";

/// Config file inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Env var overriding the gateway URL
pub const ENV_GATEWAY_URL: &str = "HELLO_GATEWAY_URL";

/// Env var overriding the log file
pub const ENV_LOG_FILE: &str = "HELLO_GATEWAY_LOG";

// Backend routes (resolved against the gateway URL)
pub const JAVA_HELLO_PATH: &str = "/api/java/hello";
pub const JAVA_HEALTH_PATH: &str = "/api/java/health";
pub const PYTHON_HELLO_PATH: &str = "/api/python/hello";
pub const PYTHON_HEALTH_PATH: &str = "/api/python/health";

// Failure literals shown in place of a greeting
pub const SPRING_FAILURE_TEXT: &str = "Failed to connect to Spring Boot.";
pub const FASTAPI_FAILURE_TEXT: &str = "Failed to connect to FastAPI.";

/// Button label while a slot is pending
pub const CALLING_LABEL: &str = "Calling...";

pub const APP_TITLE: &str = "GCP Study Circle";
pub const APP_SUBTITLE: &str = "Microservices Pattern Demo";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
