//! healthscan-web — Web front end and prediction relay for Healthscan.
//! Provides:
//!   - Health parameter intake form
//!   - Relay endpoint forwarding submissions to the prediction service
//!   - Results view with per-condition probabilities

pub mod config;
pub mod relay;
pub mod router;
pub mod handlers;
pub mod state;
