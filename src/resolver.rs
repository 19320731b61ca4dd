use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{ResolvedHeaders, RuleHeaders};
use crate::matcher::PathMatcher;
use crate::policy::ParsedPolicy;
use crate::result::ResolveError;
use crate::rule::{PolicyMap, PolicyRule};

/// Core policy engine: decides which CORS headers a response should carry
/// for the path it was served under.
///
/// The resolver is an immutable snapshot of the configuration it was built
/// from; reloading configuration means building a new resolver.
pub struct PolicyResolver<M> {
    rules: Vec<PreparedRule>,
    matcher: M,
}

struct PreparedRule {
    rule: PolicyRule,
    policy: ParsedPolicy,
}

impl<M: PathMatcher> PolicyResolver<M> {
    /// Builds a resolver from an ordered pattern to settings mapping.
    /// Settings strings are parsed once, up front.
    pub fn new(config: PolicyMap, matcher: M) -> Self {
        Self::from_rules(
            config
                .into_iter()
                .map(|(pattern, settings)| PolicyRule::new(pattern, settings)),
            matcher,
        )
    }

    pub fn from_rules<I>(rules: I, matcher: M) -> Self
    where
        I: IntoIterator<Item = PolicyRule>,
    {
        let rules = rules
            .into_iter()
            .map(|rule| PreparedRule {
                policy: ParsedPolicy::parse(rule.settings()),
                rule,
            })
            .collect();

        Self { rules, matcher }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolves the headers for one request.
    ///
    /// Every rule whose pattern matches contributes its own header values,
    /// computed independently; the contributions are then flattened in
    /// configuration order, later rules overwriting earlier ones header by
    /// header. Empty values are never emitted, so a sparse later rule leaves
    /// the other headers of an earlier rule intact. An empty map means the
    /// response should not carry any of the four headers.
    pub fn resolve(&self, request: &RequestContext<'_>) -> Result<ResolvedHeaders, ResolveError> {
        let request_origin = request.origin();
        let mut contributions: Vec<RuleHeaders> = Vec::new();

        for prepared in &self.rules {
            if !self.rule_applies(prepared.rule.pattern(), request)? {
                continue;
            }

            let builder = HeaderBuilder::new(&prepared.policy);
            contributions.push(builder.build(request_origin));
        }

        let mut resolved = ResolvedHeaders::new();
        for contribution in contributions {
            contribution.merge_into(&mut resolved);
        }

        Ok(resolved)
    }

    /// A rule applies when its pattern matches the canonical path or, if
    /// alias resolution changed the path, the raw path the client sent. The
    /// raw path is only consulted when the canonical one did not match.
    fn rule_applies(
        &self,
        pattern: &str,
        request: &RequestContext<'_>,
    ) -> Result<bool, ResolveError> {
        if self.match_path(request.canonical_path, pattern)? {
            return Ok(true);
        }
        if request.canonical_path != request.raw_path {
            return self.match_path(request.raw_path, pattern);
        }
        Ok(false)
    }

    fn match_path(&self, path: &str, pattern: &str) -> Result<bool, ResolveError> {
        self.matcher
            .matches(path, pattern)
            .map_err(|source| ResolveError::matcher(pattern, source))
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
