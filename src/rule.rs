use indexmap::IndexMap;

/// Ordered mapping of path pattern to raw settings string, as configured.
///
/// Insertion order is evaluation order, so later entries win header-by-header
/// when several patterns match one request.
pub type PolicyMap = IndexMap<String, String>;

/// One configuration entry: a path pattern bound to its `|`-delimited
/// settings string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRule {
    pattern: String,
    settings: String,
}

impl PolicyRule {
    pub fn new<P, S>(pattern: P, settings: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            settings: settings.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The raw settings string, exactly as configured.
    pub fn settings(&self) -> &str {
        &self.settings
    }
}
