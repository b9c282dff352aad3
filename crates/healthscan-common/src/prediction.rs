//! Shapes of the JSON object returned by the prediction service.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::summary::format_percent;

/// Condition name → probability, in the order the service returned them.
pub type ProbabilityMap = Map<String, Value>;

/// Single risk pair: `prediction` is 1 when disease is detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinaryPrediction {
    pub prediction: u8,
    pub probability: f64,
}

impl BinaryPrediction {
    pub fn is_positive(&self) -> bool {
        self.prediction == 1
    }

    /// Human-readable verdict shown inline on the form.
    pub fn verdict(&self) -> String {
        if self.is_positive() {
            format!(
                "Disease detected with {} confidence. Please consult a healthcare professional.",
                format_percent(self.probability)
            )
        } else {
            format!(
                "No disease detected. Probability: {}",
                format_percent(1.0 - self.probability)
            )
        }
    }
}

/// Any JSON object the prediction service may answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Binary(BinaryPrediction),
    Distribution(ProbabilityMap),
    /// A valid object matching neither shape.
    Unrecognized(Map<String, Value>),
}

impl PredictionResult {
    /// Classify a response body. Returns `None` when it is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };

        if let (Some(prediction), Some(probability)) = (
            map.get("prediction").and_then(prediction_flag),
            map.get("probability").and_then(Value::as_f64),
        ) {
            return Some(Self::Binary(BinaryPrediction { prediction, probability }));
        }

        if !map.is_empty() && map.values().all(Value::is_number) {
            return Some(Self::Distribution(map));
        }

        Some(Self::Unrecognized(map))
    }
}

/// 0 or 1, written either as an integer or as a float (`1.0`).
fn prediction_flag(value: &Value) -> Option<u8> {
    match value.as_u64() {
        Some(n @ 0..=1) => Some(n as u8),
        Some(_) => None,
        None => match value.as_f64() {
            Some(f) if f == 0.0 => Some(0),
            Some(f) if f == 1.0 => Some(1),
            _ => None,
        },
    }
}
