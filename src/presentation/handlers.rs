// HTTP request handlers
use crate::presentation::app_state::AppState;
use axum::{extract::State, response::Html};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve the dashboard page rendered at startup.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page_html.clone())
}
