//! Client side of the relay endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{HealthscanError, Result};
use crate::input::InputValues;

/// Something that can turn input values into a prediction response body.
#[async_trait]
pub trait PredictionRelay: Send + Sync {
    async fn predict(&self, values: &InputValues) -> Result<Value>;
}

/// Posts input values to a relay endpoint over HTTP.
pub struct RelayClient {
    client: Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: Client::new(), url: url.into() }
    }
}

#[async_trait]
impl PredictionRelay for RelayClient {
    #[instrument(skip(self, values), fields(url = %self.url, fields = values.len()))]
    async fn predict(&self, values: &InputValues) -> Result<Value> {
        let resp = self.client
            .post(&self.url)
            .json(values)
            .send()
            .await?;

        let status = resp.status();
        debug!(%status, "relay responded");

        if !status.is_success() {
            let message = resp
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body["error"].as_str().map(String::from))
                .unwrap_or_else(|| "Prediction failed".to_string());
            return Err(HealthscanError::Relay { status: status.as_u16(), message });
        }

        Ok(resp.json::<Value>().await?)
    }
}
