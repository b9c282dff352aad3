//! Carries a probability map from the form to the results view as a
//! percent-encoded JSON string in the `data` query parameter. Everything but
//! unreserved characters is escaped, so spaces become `%20`.

use url::form_urlencoded;

use crate::error::{HealthscanError, Result};
use crate::prediction::ProbabilityMap;

pub const RESULTS_PATH: &str = "/results";
pub const DATA_PARAM: &str = "data";

/// Location of the results view for `map`, e.g. `/results?data=%7B...%7D`.
pub fn results_location(map: &ProbabilityMap) -> Result<String> {
    let json = serde_json::to_string(map)?;
    Ok(format!("{RESULTS_PATH}?{DATA_PARAM}={}", urlencoding::encode(&json)))
}

/// Parse the (already URL-decoded) `data` value back into a probability map.
pub fn decode_payload(data: &str) -> Result<ProbabilityMap> {
    match serde_json::from_str::<serde_json::Value>(data)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(HealthscanError::Handoff(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// Extract and decode the payload from a raw query string.
pub fn payload_from_query(query: &str) -> Result<ProbabilityMap> {
    let data = form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == DATA_PARAM)
        .map(|(_, v)| v.into_owned())
        .ok_or_else(|| HealthscanError::Handoff("missing data parameter".to_string()))?;
    decode_payload(&data)
}
