//! App state - pure data structure with no I/O logic

use crate::models::{Backend, GreetingSlot};
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
pub struct AppState {
    /// Shown in the header only; requests are resolved by the network layer
    pub gateway_url: String,

    // One slot per backend, never shared
    pub spring: GreetingSlot,
    pub fastapi: GreetingSlot,

    pub focused: Backend,
    pub next_request_id: u64,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(gateway_url: impl Into<String>) -> Self {
        AppState {
            gateway_url: gateway_url.into(),
            spring: GreetingSlot::new(),
            fastapi: GreetingSlot::new(),
            focused: Backend::SpringBoot,
            next_request_id: 1,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn slot(&self, backend: Backend) -> &GreetingSlot {
        match backend {
            Backend::SpringBoot => &self.spring,
            Backend::FastApi => &self.fastapi,
        }
    }

    pub fn slot_mut(&mut self, backend: Backend) -> &mut GreetingSlot {
        match backend {
            Backend::SpringBoot => &mut self.spring,
            Backend::FastApi => &mut self.fastapi,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            gateway_url: self.gateway_url.clone(),
            spring: self.spring.clone(),
            fastapi: self.fastapi.clone(),
            focused: self.focused,
            show_help: self.show_help,
        }
    }
}
