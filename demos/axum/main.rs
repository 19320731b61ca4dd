mod cors;
mod routes;

use axum::{Router, routing::get};
use cors::middleware::cors_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = cors::build_state();

    let app = Router::new()
        .route("/api/status", get(routes::api_status))
        .route("/about", get(routes::about))
        .route("/who-we-are", get(routes::about))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            cors_middleware,
        ))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:5001")
        .await
        .expect("bind demo address");
    tracing::info!("axum demo listening on http://127.0.0.1:5001");

    axum::serve(listener, app).await.expect("serve demo");
}
