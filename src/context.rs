use crate::request_headers::RequestHeaders;

/// Per-request input consumed by the resolver.
///
/// `canonical_path` is the alias-resolved form of `raw_path` as supplied by
/// the environment; the two are equal when no alias applies. Both are the
/// request path component only, query strings excluded.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub raw_path: &'a str,
    pub canonical_path: &'a str,
    pub headers: &'a RequestHeaders,
}

impl<'a> RequestContext<'a> {
    /// The request `Origin`, when present with a non-empty value.
    pub fn origin(&self) -> Option<&'a str> {
        self.headers.origin()
    }
}
