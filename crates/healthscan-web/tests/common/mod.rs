//! Shared fixtures: a fake prediction service and relay apps pointed at it.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

use healthscan_common::catalog;
use healthscan_web::{config::Config, router::build_router, state::AppState};

/// A running fake prediction service.
pub struct Downstream {
    pub url: String,
    received: Arc<Mutex<Vec<Bytes>>>,
}

impl Downstream {
    /// Bodies received so far, in arrival order.
    pub fn received(&self) -> Vec<Bytes> {
        self.received.lock().unwrap().clone()
    }
}

/// Start a prediction service answering every POST /predict with `status` and `body`.
pub async fn spawn_downstream(status: StatusCode, body: &'static str) -> Downstream {
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();

    let app = Router::new().route(
        "/predict",
        post(move |req: Bytes| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(req);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Downstream { url: format!("http://{}/predict", addr), received }
}

/// Address nothing listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/predict", addr)
}

pub fn relay_app(predictor_url: &str) -> Router {
    let config = Config::default().with_overrides(None, Some(predictor_url.to_string()));
    build_router(AppState::new(&config))
}

/// Serve the relay app on an ephemeral port and return its /api/predict URL.
pub async fn spawn_relay(predictor_url: &str) -> String {
    let app = relay_app(predictor_url);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/predict", addr)
}

/// Urlencoded form body with every catalog field filled (value = position + 1),
/// except the ids in `skip`.
pub fn form_body(skip: &[&str]) -> String {
    catalog::parameters()
        .enumerate()
        .filter(|(_, p)| !skip.contains(&p.id))
        .map(|(i, p)| format!("{}={}", p.id, i + 1))
        .collect::<Vec<_>>()
        .join("&")
}

pub const BINARY_BODY: &str = r#"{"prediction":1,"probability":0.87}"#;
pub const DISTRIBUTION_BODY: &str = r#"{"flu":0.2,"cold":0.55,"covid":0.55}"#;
