use crate::constants::token;
use crate::util::split_trimmed;

/// Parsed origin field of a settings string.
///
/// Candidates are kept trimmed and in configuration order, the `<mirror>`
/// sentinel included, so the first candidate is exactly what the
/// configuration put first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginAllowList {
    candidates: Vec<String>,
    mirror: bool,
}

/// Outcome of resolving an origin allow list against one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Echo the presented origin back: it is listed, or the list mirrors.
    Reflect(String),
    /// No origin was presented; allow the first configured candidate.
    Static(String),
    /// The presented origin is not covered, or there is nothing to allow.
    Disallow,
}

impl OriginAllowList {
    /// Parses a comma-separated origin field.
    pub fn parse(field: &str) -> Self {
        let candidates = split_trimmed(field);
        let mirror = candidates.iter().any(|candidate| candidate == token::MIRROR);

        Self { candidates, mirror }
    }

    /// Trimmed candidates in configuration order, sentinel included.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Whether the list carries the `<mirror>` sentinel.
    pub fn mirrors(&self) -> bool {
        self.mirror
    }

    /// Exact, case-sensitive membership test. Origins are compared as the
    /// opaque strings the client and the configuration supplied.
    pub fn contains(&self, origin: &str) -> bool {
        self.candidates.iter().any(|candidate| candidate == origin)
    }

    /// Resolves the allow-origin value for a request.
    ///
    /// A presented origin is reflected only when the list covers it; an
    /// uncovered origin yields [`OriginDecision::Disallow`] so no header is
    /// set for it. Without a presented origin the first candidate is allowed
    /// verbatim, whatever it is.
    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        match request_origin {
            Some(origin) => {
                if self.mirror || self.contains(origin) {
                    OriginDecision::Reflect(origin.to_owned())
                } else {
                    OriginDecision::Disallow
                }
            }
            None => match self.candidates.first() {
                Some(candidate) => OriginDecision::Static(candidate.clone()),
                None => OriginDecision::Disallow,
            },
        }
    }
}

impl OriginDecision {
    /// The header value this decision contributes, if any.
    pub fn into_value(self) -> Option<String> {
        match self {
            OriginDecision::Reflect(value) | OriginDecision::Static(value) => Some(value),
            OriginDecision::Disallow => None,
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
