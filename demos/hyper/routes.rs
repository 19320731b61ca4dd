use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::CONTENT_TYPE;
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::cors::SharedAppState;
use crate::cors::middleware::DemoBody;

#[derive(Clone)]
pub struct AppRouter {
    state: SharedAppState,
}

pub fn router(state: SharedAppState) -> AppRouter {
    AppRouter { state }
}

impl AppRouter {
    fn respond(&self, method: &Method, path: &str) -> Response<DemoBody> {
        if method != &Method::GET {
            return plain(StatusCode::METHOD_NOT_ALLOWED, "only GET is served here");
        }

        match path {
            "/api/status" => plain(StatusCode::OK, "api: ok"),
            "/about" | "/who-we-are" => self.about_page(),
            _ => plain(StatusCode::NOT_FOUND, "nothing lives at this path"),
        }
    }

    fn about_page(&self) -> Response<DemoBody> {
        let html = format!(
            "<h1>{}</h1><p>This page reflects the caller's origin. Reach it as /about or /who-we-are.</p>",
            self.state.greeting
        );

        Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Full::new(Bytes::from(html)))
            .expect("static response")
    }
}

impl Service<Request<Incoming>> for AppRouter {
    type Response = Response<DemoBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let response = self.respond(req.method(), req.uri().path());
        Box::pin(async move { Ok(response) })
    }
}

fn plain(status: StatusCode, body: &'static str) -> Response<DemoBody> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::from(body)))
        .expect("static response")
}
