//! HTTP client wrapper - fetches greetings and probes health routes

use std::time::Duration;
use thiserror::Error;

use crate::models::{Backend, GreetingBody, GreetingResult, HealthStatus};

/// Everything that can go wrong fetching a greeting. Never shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Status: {0}")]
    Status(u16),
    #[error("invalid greeting body: {0}")]
    Body(#[from] serde_json::Error),
}

fn url_for(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// GET the backend's hello route and extract `message`
pub async fn try_fetch_greeting(
    client: &reqwest::Client,
    base_url: &str,
    backend: Backend,
) -> Result<String, FetchError> {
    let resp = client.get(url_for(base_url, backend.hello_path())).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp.text().await?;
    let greeting: GreetingBody = serde_json::from_str(&body)?;
    Ok(greeting.message)
}

/// Fetch a greeting, collapsing any error into the backend's failure text
pub async fn fetch_greeting(
    client: &reqwest::Client,
    base_url: &str,
    backend: Backend,
) -> GreetingResult {
    match try_fetch_greeting(client, base_url, backend).await {
        Ok(message) => GreetingResult::Success { message },
        Err(e) => {
            tracing::warn!(backend = backend.name(), error = %e, "{} error", backend.name());
            GreetingResult::failure(backend)
        }
    }
}

/// GET the backend's health route. Any 2xx counts as up.
pub async fn check_health(
    client: &reqwest::Client,
    base_url: &str,
    backend: Backend,
) -> HealthStatus {
    match client.get(url_for(base_url, backend.health_path())).send().await {
        Ok(resp) if resp.status().is_success() => HealthStatus::Up,
        Ok(resp) => {
            tracing::warn!(backend = backend.name(), status = resp.status().as_u16(), "Health check failed");
            HealthStatus::Down
        }
        Err(e) => {
            tracing::warn!(backend = backend.name(), error = %e, "Health check unreachable");
            HealthStatus::Down
        }
    }
}

/// Create an HTTP client. Requests never time out unless a timeout is given.
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, ?timeout, "Client build failed, using defaults without timeout");
        reqwest::Client::new()
    })
}
