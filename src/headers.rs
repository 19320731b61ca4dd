use indexmap::IndexMap;

use crate::constants::header;

/// Header name to value mapping the caller merges into the outgoing
/// response. Only `Access-Control-Allow-*` names appear as keys; an absent
/// key means the header is not set.
pub type ResolvedHeaders = IndexMap<String, String>;

/// Header values one matched rule produced, before the ordered flatten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RuleHeaders {
    pub origin: Option<String>,
    pub methods: Option<String>,
    pub headers: Option<String>,
    pub credentials: Option<String>,
}

impl RuleHeaders {
    /// Writes this rule's values into `resolved`, overwriting earlier values
    /// header by header. Empty values are never written, so a later rule
    /// cannot blank out what an earlier rule set.
    pub(crate) fn merge_into(self, resolved: &mut ResolvedHeaders) {
        write_non_empty(resolved, header::ACCESS_CONTROL_ALLOW_ORIGIN, self.origin);
        write_non_empty(resolved, header::ACCESS_CONTROL_ALLOW_METHODS, self.methods);
        write_non_empty(resolved, header::ACCESS_CONTROL_ALLOW_HEADERS, self.headers);
        write_non_empty(
            resolved,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            self.credentials,
        );
    }
}

fn write_non_empty(resolved: &mut ResolvedHeaders, name: &str, value: Option<String>) {
    if let Some(value) = value
        && !value.is_empty()
    {
        resolved.insert(name.to_owned(), value);
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
