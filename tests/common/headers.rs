#![allow(dead_code)]

use pathcors::ResolvedHeaders;

pub fn header_value<'a>(headers: &'a ResolvedHeaders, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &ResolvedHeaders, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn header_names(headers: &ResolvedHeaders) -> Vec<&str> {
    headers.keys().map(String::as_str).collect()
}
