//! healthscan-common — Shared types used by the Healthscan intake form and relay.
//!
//! Covers the parameter catalog, input values, prediction result shapes,
//! the results summary, and the intake form lifecycle.

pub mod error;
pub mod catalog;
pub mod input;
pub mod prediction;
pub mod summary;
pub mod handoff;
pub mod form;
pub mod client;

// Re-export commonly used types
pub use catalog::{Parameter, ParameterGroup, CATALOG};
pub use error::{HealthscanError, MissingParameters, Result};
pub use input::InputValues;
pub use prediction::{BinaryPrediction, PredictionResult, ProbabilityMap};
pub use summary::{ResultsSummary, SummaryEntry};
pub use form::{FormPhase, IntakeForm, SubmitOutcome};
pub use client::{PredictionRelay, RelayClient};
