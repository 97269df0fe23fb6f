//! Network actor - runs greeting fetches and health probes in the Tokio runtime

use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{check_health, create_client, fetch_greeting};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    gateway_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(config.request_timeout_secs.map(Duration::from_secs)),
            gateway_url: config.gateway_url.clone(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchGreeting { id, backend }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.gateway_url.clone();

                            // No cancellation: a fetch always runs to settlement
                            self.active_requests.spawn(async move {
                                tracing::info!(id, backend = backend.name(), path = backend.hello_path(), "Fetching greeting");
                                let start = Instant::now();
                                let result = fetch_greeting(&client, &base_url, backend).await;
                                let time_ms = start.elapsed().as_millis() as u64;
                                tracing::info!(id, ok = result.is_success(), time_ms, "Greeting fetch settled");
                                let _ = response_tx.send(NetworkResponse::Greeting { id, backend, result, time_ms });
                            });
                        }

                        Some(NetworkCommand::CheckHealth { id, backend }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.gateway_url.clone();

                            self.active_requests.spawn(async move {
                                let status = check_health(&client, &base_url, backend).await;
                                tracing::info!(id, backend = backend.name(), status = status.as_str(), "Health check settled");
                                let _ = response_tx.send(NetworkResponse::Health { id, backend, status });
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
