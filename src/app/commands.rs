//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Backend, HealthStatus};

impl AppState {
    // ========================
    // Focus
    // ========================

    pub fn focus_next(&mut self) {
        self.focused = self.focused.other();
    }

    pub fn focus(&mut self, backend: Backend) {
        self.focused = backend;
    }

    // ========================
    // Greeting fetches
    // ========================

    /// Press a backend's button. Returns None while its slot is pending,
    /// the same as clicking a disabled button.
    pub fn press(&mut self, backend: Backend) -> Option<NetworkCommand> {
        if self.slot(backend).pending {
            tracing::debug!(backend = backend.name(), "Ignoring press while pending");
            return None;
        }

        let id = self.next_id();
        self.slot_mut(backend).begin();
        Some(NetworkCommand::FetchGreeting { id, backend })
    }

    pub fn press_focused(&mut self) -> Option<NetworkCommand> {
        self.press(self.focused)
    }

    // ========================
    // Health
    // ========================

    /// Probe both backends. A backend already being probed is skipped.
    pub fn check_health(&mut self) -> Vec<NetworkCommand> {
        let mut commands = Vec::new();
        for backend in Backend::ALL {
            if self.slot(backend).health == HealthStatus::Checking {
                continue;
            }
            let id = self.next_id();
            self.slot_mut(backend).health = HealthStatus::Checking;
            commands.push(NetworkCommand::CheckHealth { id, backend });
        }
        commands
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Greeting { id, backend, result, time_ms } => {
                tracing::debug!(id, backend = backend.name(), ok = result.is_success(), "Greeting settled");
                self.slot_mut(backend).settle(&result, time_ms);
            }
            NetworkResponse::Health { backend, status, .. } => {
                self.slot_mut(backend).health = status;
            }
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
