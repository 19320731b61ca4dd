use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::cors::AppState;

pub async fn about(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>This page reflects the caller's origin. Reach it as /about or /who-we-are.</p>",
        state.greeting
    ))
}

pub async fn api_status() -> impl IntoResponse {
    "api: ok"
}
