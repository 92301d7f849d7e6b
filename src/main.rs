// Main entry point - configuration, one-time composition, and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::application::composer::compose_page;
use crate::infrastructure::config::{load_server_config, load_widgets_config};
use crate::infrastructure::csv_loader::load_dataset;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard, health_check};
use crate::presentation::views::render_page;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let widgets_config = load_widgets_config()?;

    // Load the historical dataset once. A malformed file must abort
    // startup here rather than let the dashboard serve blank widgets.
    let dataset = load_dataset(&server_config.server.data_file)?;
    tracing::info!(rows = dataset.len(), "dataset loaded");

    // Compose and render the page once; every request serves this snapshot.
    let page = compose_page(&dataset, &widgets_config)?;
    let page_html = render_page(&page).into_string();
    tracing::info!(tabs = page.tabs.len(), "dashboard composed");

    // Session secret for the web server, resolved but otherwise unused
    // until a session layer is mounted in front of the dashboard.
    let session_secret = server_config.server.session_secret();
    tracing::debug!(secret_len = session_secret.len(), "session secret ready");

    let state = Arc::new(AppState { page_html });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(dashboard))
        .nest_service("/assets", ServeDir::new(&server_config.server.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config.server.bind.parse()?;
    println!("Starting greenhouse-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
