//! Intake form driven over real HTTP through the relay.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use healthscan_common::{
    catalog, FormPhase, HealthscanError, InputValues, IntakeForm, PredictionRelay, RelayClient,
    SubmitOutcome,
};
use common::{spawn_downstream, spawn_relay, BINARY_BODY, DISTRIBUTION_BODY};

fn filled_form() -> IntakeForm {
    let mut form = IntakeForm::new();
    for (i, p) in catalog::parameters().enumerate() {
        form.edit(p.id, &format!("{}.5", i));
    }
    form
}

#[tokio::test]
async fn test_submission_reaches_downstream_once() {
    let downstream = spawn_downstream(StatusCode::OK, BINARY_BODY).await;
    let client = RelayClient::new(spawn_relay(&downstream.url).await);

    let mut form = filled_form();
    let expected = form.values().to_json();

    let phase = form.submit(&client).await.clone();
    match phase {
        FormPhase::Succeeded(SubmitOutcome::Inline(pair)) => {
            assert_eq!(pair.prediction, 1);
            assert_eq!(pair.probability, 0.87);
        }
        other => panic!("expected inline result, got {:?}", other),
    }

    let received = downstream.received();
    assert_eq!(received.len(), 1);
    let sent: Value = serde_json::from_slice(&received[0]).unwrap();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn test_distribution_navigates() {
    let downstream = spawn_downstream(StatusCode::OK, DISTRIBUTION_BODY).await;
    let client = RelayClient::new(spawn_relay(&downstream.url).await);

    let mut form = filled_form();
    assert!(matches!(
        form.submit(&client).await,
        FormPhase::Succeeded(SubmitOutcome::Navigate(_))
    ));
}

#[tokio::test]
async fn test_client_surfaces_relay_error() {
    let downstream = spawn_downstream(StatusCode::UNPROCESSABLE_ENTITY, r#"{"error":"bad input"}"#).await;
    let client = RelayClient::new(spawn_relay(&downstream.url).await);

    let values = InputValues::new().with_raw("glucose", "95");
    match client.predict(&values).await {
        Err(HealthscanError::Relay { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "bad input");
        }
        other => panic!("expected relay error, got {:?}", other),
    }
}
