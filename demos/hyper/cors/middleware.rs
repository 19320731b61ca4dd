use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};
use pathcors::{RequestContext, RequestHeaders, ResolveError, ResolvedHeaders};

use super::SharedAppState;

pub type DemoBody = Full<Bytes>;

/// Service wrapper that resolves the CORS headers for each request and
/// merges them into whatever response the inner service produces, following
/// hyper's server middleware guide pattern.
#[derive(Clone)]
pub struct PathCors<S> {
    inner: S,
    state: SharedAppState,
}

impl<S> PathCors<S> {
    pub fn new(state: SharedAppState, inner: S) -> Self {
        Self { inner, state }
    }

    fn resolve_for(&self, req: &Request<Incoming>) -> Result<ResolvedHeaders, ResolveError> {
        let raw_path = req.uri().path();
        let canonical_path = self.state.canonical_path(raw_path);
        let request_headers = snapshot_headers(req.headers());

        let context = RequestContext {
            raw_path,
            canonical_path: &canonical_path,
            headers: &request_headers,
        };
        self.state.resolver.resolve(&context)
    }
}

impl<S> Service<Request<Incoming>> for PathCors<S>
where
    S: Service<Request<Incoming>, Response = Response<DemoBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<DemoBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let outcome = self.resolve_for(&req);
        let inner = self.inner.clone();

        Box::pin(async move {
            match outcome {
                Ok(resolved) => {
                    let mut response = inner.call(req).await?;
                    merge_resolved(response.headers_mut(), &resolved);
                    Ok(response)
                }
                Err(err) => Ok(resolution_error_response(err)),
            }
        })
    }
}

fn resolution_error_response(err: ResolveError) -> Response<DemoBody> {
    tracing::error!(error = %err, "CORS header resolution failed");

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .body(Full::new(Bytes::from(format!(
            "CORS resolution error: {err}"
        ))))
        .expect("static response")
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
