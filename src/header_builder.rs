use crate::headers::RuleHeaders;
use crate::policy::ParsedPolicy;
use crate::util::join_header_value;

/// Computes the header values one matched rule contributes.
pub(crate) struct HeaderBuilder<'a> {
    policy: &'a ParsedPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a ParsedPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build(&self, request_origin: Option<&str>) -> RuleHeaders {
        RuleHeaders {
            origin: self.build_origin_value(request_origin),
            methods: Self::build_list_value(self.policy.methods.as_deref()),
            headers: Self::build_list_value(self.policy.headers.as_deref()),
            credentials: self.policy.credentials.clone(),
        }
    }

    fn build_origin_value(&self, request_origin: Option<&str>) -> Option<String> {
        self.policy
            .origins
            .as_ref()
            .and_then(|list| list.resolve(request_origin).into_value())
    }

    fn build_list_value(tokens: Option<&[String]>) -> Option<String> {
        tokens.map(join_header_value)
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
