/// Splits a comma-separated settings field into trimmed tokens.
///
/// Inner empty tokens survive so the joined form keeps the shape of the
/// configured value (`"a,,b"` becomes `["a", "", "b"]`).
pub(crate) fn split_trimmed(field: &str) -> Vec<String> {
    field.split(',').map(|token| token.trim().to_owned()).collect()
}

/// Joins tokens into the on-the-wire form of a multi-valued header.
pub(crate) fn join_header_value(tokens: &[String]) -> String {
    tokens.join(", ")
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
