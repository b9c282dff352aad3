//! Intake form state: field values plus the request lifecycle
//! (idle → pending → succeeded | failed).

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::client::PredictionRelay;
use crate::error::{HealthscanError, Result};
use crate::handoff;
use crate::input::InputValues;
use crate::prediction::{BinaryPrediction, PredictionResult};

/// Shown for any relay or transport failure.
pub const GENERIC_ERROR: &str =
    "An error occurred while processing your request. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Single risk pair, rendered on the form itself
    Inline(BinaryPrediction),
    /// Per-condition probabilities; go to this results location
    Navigate(String),
    /// Some other JSON object, shown as-is
    Raw(Map<String, Value>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Pending,
    Succeeded(SubmitOutcome),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    values: InputValues,
    phase: FormPhase,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &InputValues {
        &self.values
    }

    /// True while a request is in flight; resubmission is disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Apply the text typed into field `id`.
    pub fn edit(&mut self, id: &str, raw: &str) {
        self.values = self.values.with_raw(id, raw);
    }

    /// Validate and move to `Pending`, handing back the payload to send.
    ///
    /// Validation failures leave the form `Failed` and nothing must be sent.
    pub fn begin_submit(&mut self) -> Result<InputValues> {
        if self.is_busy() {
            return Err(HealthscanError::Busy);
        }

        if let Err(missing) = self.values.validate() {
            debug!(missing = missing.labels.len(), "submission rejected by validation");
            self.phase = FormPhase::Failed(missing.to_string());
            return Err(missing.into());
        }

        self.phase = FormPhase::Pending;
        Ok(std::mem::take(&mut self.values))
    }

    /// Record the relay's answer for the in-flight submission.
    pub fn settle(&mut self, response: Result<Value>) -> &FormPhase {
        self.phase = match response {
            Ok(body) => match Self::outcome(body) {
                Ok(outcome) => FormPhase::Succeeded(outcome),
                Err(e) => {
                    warn!(error = %e, "unusable prediction response");
                    FormPhase::Failed(GENERIC_ERROR.to_string())
                }
            },
            Err(e) => {
                warn!(error = %e, "prediction request failed");
                FormPhase::Failed(GENERIC_ERROR.to_string())
            }
        };
        &self.phase
    }

    /// Run one full submission through `relay`. No retries.
    pub async fn submit(&mut self, relay: &dyn PredictionRelay) -> &FormPhase {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(_) => return &self.phase,
        };
        let response = relay.predict(&payload).await;
        self.settle(response)
    }

    fn outcome(body: Value) -> Result<SubmitOutcome> {
        match PredictionResult::from_value(body) {
            Some(PredictionResult::Binary(pair)) => Ok(SubmitOutcome::Inline(pair)),
            Some(PredictionResult::Distribution(map)) => {
                Ok(SubmitOutcome::Navigate(handoff::results_location(&map)?))
            }
            Some(PredictionResult::Unrecognized(map)) => Ok(SubmitOutcome::Raw(map)),
            None => Err(HealthscanError::Handoff("response is not a JSON object".to_string())),
        }
    }
}
