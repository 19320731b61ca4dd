#![allow(dead_code)]

use pathcors::{
    PathMatcher, PatternSetMatcher, PolicyMap, PolicyResolver, RequestContext, RequestHeaders,
    ResolvedHeaders,
};

#[derive(Default)]
pub struct ResolverBuilder {
    rules: Vec<(String, String)>,
    front: Option<String>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, pattern: impl Into<String>, settings: impl Into<String>) -> Self {
        self.rules.push((pattern.into(), settings.into()));
        self
    }

    pub fn front(mut self, path: impl Into<String>) -> Self {
        self.front = Some(path.into());
        self
    }

    pub fn build(self) -> PolicyResolver<PatternSetMatcher> {
        let matcher = match &self.front {
            Some(path) => PatternSetMatcher::with_front(path.clone()),
            None => PatternSetMatcher::new(),
        };
        self.build_with(matcher)
    }

    pub fn build_with<M: PathMatcher>(self, matcher: M) -> PolicyResolver<M> {
        let config: PolicyMap = self.rules.into_iter().collect();
        PolicyResolver::new(config, matcher)
    }
}

pub struct RequestBuilder {
    raw_path: String,
    canonical_path: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            raw_path: path.into(),
            canonical_path: None,
            headers: Vec::new(),
        }
    }

    /// Sets the alias-resolved path when it differs from the raw one.
    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = Some(path.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header("Origin", origin)
    }

    pub fn resolve<M: PathMatcher>(self, resolver: &PolicyResolver<M>) -> ResolvedHeaders {
        let RequestBuilder {
            raw_path,
            canonical_path,
            headers,
        } = self;

        let request_headers: RequestHeaders = headers.into_iter().collect();
        let canonical_path = canonical_path.as_deref().unwrap_or(&raw_path);
        let ctx = RequestContext {
            raw_path: &raw_path,
            canonical_path,
            headers: &request_headers,
        };
        resolver
            .resolve(&ctx)
            .expect("request resolution should succeed")
    }
}

pub fn resolver() -> ResolverBuilder {
    ResolverBuilder::new()
}

pub fn request(path: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(path)
}
