use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use regex_automata::meta::{BuildError, Regex};

use crate::constants::token;
use crate::matcher::{MatchError, PathMatcher};

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const DEFAULT_FRONT_PATH: &str = "/";

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    Timeout { elapsed: Duration, budget: Duration },
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile path pattern"),
            PatternError::Timeout { .. } => {
                write!(f, "compiling path pattern exceeded the configured budget")
            }
            PatternError::TooLong { length, max } => write!(
                f,
                "path pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// A block of path patterns compiled into a single anchored regex.
///
/// One pattern per line. `*` matches any run of characters including `/`,
/// every other character matches itself, and a line that is exactly
/// `<front>` stands for the front page path. A path matches the set when it
/// matches any line in full; matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct PatternSet {
    regex: Regex,
}

impl PatternSet {
    /// Compiles `patterns` with `/` as the front page path.
    pub fn compile(patterns: &str) -> Result<Self, PatternError> {
        Self::compile_with_front(patterns, DEFAULT_FRONT_PATH)
    }

    /// Compiles `patterns`, substituting `front` for `<front>` lines.
    pub fn compile_with_front(patterns: &str, front: &str) -> Result<Self, PatternError> {
        Self::compile_budgeted(patterns, front, PATTERN_COMPILE_BUDGET)
    }

    fn compile_budgeted(
        patterns: &str,
        front: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        if patterns.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: patterns.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let source = regex_source(patterns, front);
        let started = Instant::now();
        let regex = Regex::new(&source).map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(Self { regex })
    }

    #[cfg(test)]
    pub(crate) fn compile_with_budget(
        patterns: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_budgeted(patterns, DEFAULT_FRONT_PATH, budget)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path.as_bytes())
    }
}

fn regex_source(patterns: &str, front: &str) -> String {
    let mut source = String::with_capacity(patterns.len() + 8);
    source.push_str("^(?:");
    for (index, line) in patterns.lines().enumerate() {
        if index > 0 {
            source.push('|');
        }
        if line == token::FRONT {
            push_literal(&mut source, front);
        } else {
            push_pattern_line(&mut source, line);
        }
    }
    source.push_str(")$");
    source
}

fn push_pattern_line(source: &mut String, line: &str) {
    for ch in line.chars() {
        if ch == '*' {
            source.push_str(".*");
        } else {
            push_escaped(source, ch);
        }
    }
}

fn push_literal(source: &mut String, value: &str) {
    for ch in value.chars() {
        push_escaped(source, ch);
    }
}

fn push_escaped(source: &mut String, ch: char) {
    if matches!(
        ch,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
    ) {
        source.push('\\');
    }
    source.push(ch);
}

/// [`PathMatcher`] over [`PatternSet`] syntax.
///
/// Compiled sets are memoized per pattern string, so a resolver evaluating
/// the same configuration against many requests pays compilation once.
#[derive(Debug)]
pub struct PatternSetMatcher {
    front: String,
    compiled: Mutex<HashMap<String, PatternSet>>,
}

impl PatternSetMatcher {
    pub fn new() -> Self {
        Self::with_front(DEFAULT_FRONT_PATH)
    }

    /// Uses `front` as the path `<front>` lines stand for.
    pub fn with_front<F: Into<String>>(front: F) -> Self {
        Self {
            front: front.into(),
            compiled: Mutex::new(HashMap::new()),
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }
}

impl Default for PatternSetMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PathMatcher for PatternSetMatcher {
    fn matches(&self, path: &str, pattern: &str) -> Result<bool, MatchError> {
        let mut compiled = self
            .compiled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(set) = compiled.get(pattern) {
            return Ok(set.is_match(path));
        }

        let set = PatternSet::compile_with_front(pattern, &self.front)?;
        let matched = set.is_match(path);
        compiled.insert(pattern.to_owned(), set);
        Ok(matched)
    }
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
