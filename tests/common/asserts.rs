#![allow(dead_code)]

use pathcors::ResolvedHeaders;

use super::headers::header_value;

pub fn assert_header_eq(headers: &ResolvedHeaders, name: &str, expected: &str) {
    match header_value(headers, name) {
        Some(actual) => assert_eq!(actual, expected, "unexpected value for header {name}"),
        None => panic!("expected header {name} to be set"),
    }
}

pub fn assert_no_header(headers: &ResolvedHeaders, name: &str) {
    if let Some(value) = header_value(headers, name) {
        panic!("expected header {name} to be absent, found `{value}`");
    }
}

pub fn assert_no_headers(headers: &ResolvedHeaders) {
    assert!(
        headers.is_empty(),
        "expected no headers, found {:?}",
        headers
    );
}
