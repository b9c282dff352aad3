use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthscanError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] MissingParameters),

    #[error("Relay returned {status}: {message}")]
    Relay { status: u16, message: String },

    #[error("A submission is already in progress")]
    Busy,

    #[error("Results hand-off error: {0}")]
    Handoff(String),
}

pub type Result<T> = std::result::Result<T, HealthscanError>;

/// Catalog parameters with no usable value, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all parameters. Missing: {}", .labels.join(", "))]
pub struct MissingParameters {
    pub labels: Vec<&'static str>,
}
