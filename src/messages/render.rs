//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_GATEWAY_URL;
use crate::models::{Backend, GreetingSlot};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub gateway_url: String,
    pub spring: GreetingSlot,
    pub fastapi: GreetingSlot,
    /// Card whose button Enter presses
    pub focused: Backend,
    pub show_help: bool,
}

impl RenderState {
    pub fn slot(&self, backend: Backend) -> &GreetingSlot {
        match backend {
            Backend::SpringBoot => &self.spring,
            Backend::FastApi => &self.fastapi,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            gateway_url: String::from(DEFAULT_GATEWAY_URL),
            spring: GreetingSlot::new(),
            fastapi: GreetingSlot::new(),
            focused: Backend::SpringBoot,
            show_help: false,
        }
    }
}
