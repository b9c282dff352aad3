//! Results view — GET /results?data=<percent-encoded probability map>.

use axum::{
    extract::Query,
    http::StatusCode,
    response::Response,
};
use minijinja::context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use healthscan_common::handoff::decode_payload;
use healthscan_common::summary::{summarize, ResultsSummary};

use crate::handlers::layout::{into_html, render};

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub data: Option<String>,
}

pub async fn results_page(Query(query): Query<ResultsQuery>) -> Response {
    let Some(data) = query.data else {
        return into_html(render_results(None), StatusCode::BAD_REQUEST);
    };

    match decode_payload(&data) {
        Ok(map) => into_html(render_results(Some(&summarize(&map))), StatusCode::OK),
        Err(e) => {
            warn!("Malformed results payload: {}", e);
            into_html(render_results(None), StatusCode::BAD_REQUEST)
        }
    }
}

/// One line of the detailed probability list.
#[derive(Debug, Serialize)]
struct Row<'a> {
    condition: &'a str,
    percent: &'a str,
    width: String,
}

/// Summary plus the ranked probability list; `None` renders the empty state.
pub fn render_results(summary: Option<&ResultsSummary>) -> Result<String, minijinja::Error> {
    let rows: Vec<Row> = summary
        .map(|s| s.ranked().into_iter().map(|e| Row {
            condition: &e.condition,
            percent: &e.percent,
            width: format!("{:.2}", e.bar_width),
        }).collect())
        .unwrap_or_default();

    render("results.html", context! {
        title => "Health Analysis Results",
        summary => summary,
        rows => rows,
    })
}
