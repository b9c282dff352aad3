//! Relay endpoint — POST /api/predict.

use axum::{body::Bytes, extract::State};
use serde_json::Value;
use tracing::warn;

use crate::relay::RelayReply;
use crate::state::SharedState;

/// Forward one JSON object to the prediction service and mirror its answer.
/// Bodies that are not a JSON object get the fixed failure response.
pub async fn predict(State(state): State<SharedState>, body: Bytes) -> RelayReply {
    match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(_)) => state.forwarder.forward(body).await,
        Ok(_) => {
            warn!("Relay request body is not a JSON object");
            RelayReply::transport_failure()
        }
        Err(e) => {
            warn!("Relay request body is not valid JSON: {}", e);
            RelayReply::transport_failure()
        }
    }
}
