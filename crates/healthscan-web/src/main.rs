//! Healthscan Web Server
//!
//! Run with: cargo run -p healthscan-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use healthscan_web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("healthscan_web=debug,healthscan_common=debug,info")),
        )
        .init();

    info!("Starting Healthscan Web Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!("Prediction service: {}", config.predictor.url);

    let bind_addr = &config.server.bind;
    let state = healthscan_web::state::AppState::new(&config);
    let app = healthscan_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Server listening on http://{}", bind_addr);
    info!("   Intake form:  http://{}/", bind_addr);
    info!("   Relay:        POST http://{}/api/predict", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
