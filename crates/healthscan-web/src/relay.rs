//! Pass-through relay to the external prediction service.
//!
//! One downstream attempt per request, no timeout, no retry.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error, instrument, warn};

use healthscan_common::{HealthscanError, InputValues, PredictionRelay};

/// Returned whenever the downstream call or a body cannot be processed.
pub const TRANSPORT_ERROR: &str = "Failed to process request";
/// Used when a downstream failure carries no error message.
pub const DOWNSTREAM_FALLBACK: &str = "Prediction service error";

/// Outcome of one relayed request.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayReply {
    /// Downstream body, unmodified
    Success(Bytes),
    Failure { status: StatusCode, message: String },
}

impl RelayReply {
    pub fn transport_failure() -> Self {
        Self::Failure {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: TRANSPORT_ERROR.to_string(),
        }
    }
}

impl IntoResponse for RelayReply {
    fn into_response(self) -> Response {
        match self {
            RelayReply::Success(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            ).into_response(),
            RelayReply::Failure { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

pub struct Forwarder {
    client: Client,
    url: String,
}

impl Forwarder {
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: Client::new(), url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `body` (a serialized JSON object) downstream as-is and map the answer.
    #[instrument(skip(self, body), fields(url = %self.url, bytes = body.len()))]
    pub async fn forward(&self, body: Bytes) -> RelayReply {
        let resp = match self.client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to reach prediction service: {}", e);
                return RelayReply::transport_failure();
            }
        };

        let status = resp.status();
        let bytes = match resp.bytes().await {
            Ok(b) => b,
            Err(e) => {
                error!("Failed to read prediction response: {}", e);
                return RelayReply::transport_failure();
            }
        };
        debug!(%status, len = bytes.len(), "prediction service responded");

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|v| v["error"].as_str().map(String::from))
                .unwrap_or_else(|| DOWNSTREAM_FALLBACK.to_string());
            warn!(%status, %message, "prediction service returned an error");
            let status = StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return RelayReply::Failure { status, message };
        }

        if serde_json::from_slice::<Value>(&bytes).is_err() {
            error!("Prediction service returned a body that is not JSON");
            return RelayReply::transport_failure();
        }

        RelayReply::Success(bytes)
    }
}

/// Lets the server-rendered form relay in-process.
#[async_trait]
impl PredictionRelay for Forwarder {
    async fn predict(&self, values: &InputValues) -> healthscan_common::Result<Value> {
        let body = serde_json::to_vec(values)?;
        match self.forward(Bytes::from(body)).await {
            RelayReply::Success(bytes) => Ok(serde_json::from_slice(&bytes)?),
            RelayReply::Failure { status, message } => Err(HealthscanError::Relay {
                status: status.as_u16(),
                message,
            }),
        }
    }
}
