use thiserror::Error;

use crate::matcher::MatchError;

/// Errors produced while resolving a request.
///
/// A failing path matcher is the only fatal condition; everything else the
/// resolver encounters degrades to setting no header.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("path matcher failed while evaluating pattern `{pattern}`")]
    Matcher {
        pattern: String,
        #[source]
        source: MatchError,
    },
}

impl ResolveError {
    pub(crate) fn matcher(pattern: &str, source: MatchError) -> Self {
        Self::Matcher {
            pattern: pattern.to_owned(),
            source,
        }
    }
}
