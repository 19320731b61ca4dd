use crate::origin::OriginAllowList;
use crate::util::split_trimmed;

/// Typed form of a rule's `|`-delimited settings string.
///
/// Field order is fixed: origins, methods, headers, credentials. A field is
/// present only when its raw counterpart is non-empty; missing trailing
/// fields and surplus fields are tolerated, so parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPolicy {
    /// Allowed origin candidates, when the origins field is non-empty.
    pub origins: Option<OriginAllowList>,
    /// Trimmed method tokens, when the methods field is non-empty.
    pub methods: Option<Vec<String>>,
    /// Trimmed header name tokens, when the headers field is non-empty.
    pub headers: Option<Vec<String>>,
    /// Trimmed credentials value, when the credentials field has one.
    pub credentials: Option<String>,
}

impl ParsedPolicy {
    pub fn parse(settings: &str) -> Self {
        let mut fields = settings.split('|');

        let origins = fields
            .next()
            .filter(|field| !field.is_empty())
            .map(OriginAllowList::parse);
        let methods = fields
            .next()
            .filter(|field| !field.is_empty())
            .map(split_trimmed);
        let headers = fields
            .next()
            .filter(|field| !field.is_empty())
            .map(split_trimmed);
        let credentials = fields
            .next()
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_owned);

        Self {
            origins,
            methods,
            headers,
            credentials,
        }
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.origins.is_none()
            && self.methods.is_none()
            && self.headers.is_none()
            && self.credentials.is_none()
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
