use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use pathcors::{RequestContext, RequestHeaders, ResolveError, ResolvedHeaders};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let raw_path = request.uri().path().to_owned();
    let canonical_path = state.canonical_path(&raw_path);
    let request_headers = snapshot_headers(request.headers());

    let context = RequestContext {
        raw_path: &raw_path,
        canonical_path: &canonical_path,
        headers: &request_headers,
    };

    let resolved = match state.resolver.resolve(&context) {
        Ok(resolved) => resolved,
        Err(err) => return resolution_error_response(err),
    };

    let mut response = next.run(request).await;
    merge_resolved(response.headers_mut(), &resolved);
    response
}

fn resolution_error_response(err: ResolveError) -> Response {
    tracing::error!(error = %err, "CORS header resolution failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("CORS resolution error: {err}"),
    )
        .into_response()
}

fn snapshot_headers(map: &HeaderMap) -> RequestHeaders {
    let mut headers = RequestHeaders::new();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.append(name.as_str(), value);
        }
    }
    headers
}

fn merge_resolved(target: &mut HeaderMap, resolved: &ResolvedHeaders) {
    for (name, value) in resolved {
        let Ok(name) = HeaderName::try_from(name.as_str()) else {
            continue;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            continue;
        };
        target.insert(name, value);
    }
}
