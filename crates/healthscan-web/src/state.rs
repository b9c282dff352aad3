//! Shared application state for the web server.

use std::sync::Arc;

use crate::config::Config;
use crate::relay::Forwarder;

/// Shared state injected into every Axum handler. Read-only after startup.
pub struct AppState {
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self { forwarder: Forwarder::new(config.predictor.url.clone()) }
    }
}

pub type SharedState = Arc<AppState>;
