//! Intake form — GET / renders the catalog, POST / validates and relays.

use std::collections::HashMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;
use serde::Serialize;
use tracing::info;

use healthscan_common::{catalog::CATALOG, FormPhase, IntakeForm, SubmitOutcome};

use crate::handlers::layout::{into_html, render};
use crate::state::SharedState;

pub async fn form_page() -> Response {
    into_html(render_form_page(&HashMap::new(), None), StatusCode::OK)
}

pub async fn form_submit(
    State(state): State<SharedState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let mut form = IntakeForm::new();
    for (id, raw) in &fields {
        form.edit(id, raw);
    }

    match form.submit(&state.forwarder).await {
        FormPhase::Succeeded(SubmitOutcome::Navigate(location)) => {
            info!("Prediction complete, redirecting to results");
            Redirect::to(location).into_response()
        }
        phase => into_html(render_form_page(&fields, Some(phase)), StatusCode::OK),
    }
}

/// Alert shown under the fields once a submission settles.
#[derive(Debug, Serialize)]
struct Alert {
    kind: &'static str,
    title: &'static str,
    message: String,
    preformatted: bool,
}

impl Alert {
    fn for_phase(phase: &FormPhase) -> Option<Self> {
        match phase {
            FormPhase::Failed(msg) => Some(Self {
                kind: "error",
                title: "Error",
                message: msg.clone(),
                preformatted: false,
            }),
            FormPhase::Succeeded(SubmitOutcome::Inline(pair)) => Some(Self {
                kind: if pair.is_positive() { "error" } else { "success" },
                title: "Analysis Complete",
                message: pair.verdict(),
                preformatted: false,
            }),
            FormPhase::Succeeded(SubmitOutcome::Raw(map)) => Some(Self {
                kind: "success",
                title: "Analysis Complete",
                message: serde_json::to_string_pretty(map).unwrap_or_default(),
                preformatted: true,
            }),
            _ => None,
        }
    }
}

/// Form page with the submitted text kept in each field.
pub fn render_form_page(
    fields: &HashMap<String, String>,
    phase: Option<&FormPhase>,
) -> Result<String, minijinja::Error> {
    render("form.html", context! {
        title => "Health Parameters",
        groups => CATALOG,
        values => fields,
        alert => phase.and_then(Alert::for_phase),
    })
}
