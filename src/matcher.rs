use std::error::Error;

/// Failure reported by a [`PathMatcher`] implementation.
pub type MatchError = Box<dyn Error + Send + Sync>;

/// Environment-provided path matching capability.
///
/// The resolver hands every configured pattern to this trait and only
/// consumes the boolean outcome, so the pattern syntax is whatever the
/// implementation supports. A returned error is treated as fatal and
/// propagated to the caller instead of being guessed around.
///
/// Infallible matchers can be plain closures:
///
/// ```
/// use pathcors::PathMatcher;
///
/// let exact = |path: &str, pattern: &str| path == pattern;
/// assert!(exact.matches("/api", "/api").unwrap());
/// ```
pub trait PathMatcher {
    fn matches(&self, path: &str, pattern: &str) -> Result<bool, MatchError>;
}

impl<F> PathMatcher for F
where
    F: Fn(&str, &str) -> bool,
{
    fn matches(&self, path: &str, pattern: &str) -> Result<bool, MatchError> {
        Ok(self(path, pattern))
    }
}
