mod common;

use pathcors::constants::header;

use common::asserts::{assert_header_eq, assert_no_header};
use common::builders::{request, resolver};

mod list_values {
    use super::*;

    #[test]
    fn should_join_tokens_with_comma_space_when_settings_use_bare_commas() {
        let resolver = resolver()
            .rule("/api/*", "https://a.com|GET,POST,PUT|X-One,X-Two")
            .build();

        let headers = request("/api/users").resolve(&resolver);

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT");
        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS, "X-One, X-Two");
    }

    #[test]
    fn should_collapse_irregular_spacing_when_settings_are_messy() {
        let resolver = resolver()
            .rule("/api/*", "https://a.com|  GET ,   POST|  Content-Type  ")
            .build();

        let headers = request("/api/users").resolve(&resolver);

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST");
        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type");
    }

    #[test]
    fn should_keep_token_case_when_settings_mix_cases() {
        let resolver = resolver().rule("/api/*", "https://a.com|get, Post").build();

        let headers = request("/api/users").resolve(&resolver);

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_METHODS, "get, Post");
    }

    #[test]
    fn should_keep_inner_empty_tokens_when_settings_have_consecutive_commas() {
        let resolver = resolver().rule("/api/*", "https://a.com|GET,,POST").build();

        let headers = request("/api/users").resolve(&resolver);

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_METHODS, "GET, , POST");
    }
}

mod credentials_values {
    use super::*;

    #[test]
    fn should_emit_credentials_verbatim_when_the_field_says_true() {
        let resolver = resolver().rule("/api/*", "https://a.com|||true").build();

        let headers = request("/api/users").resolve(&resolver);

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    }

    #[test]
    fn should_emit_credentials_verbatim_when_the_field_is_not_a_boolean() {
        let resolver = resolver().rule("/api/*", "https://a.com|||anything").build();

        let headers = request("/api/users").resolve(&resolver);

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "anything");
    }

    #[test]
    fn should_trim_the_credentials_value_when_the_field_has_padding() {
        let resolver = resolver().rule("/api/*", "https://a.com|||  false  ").build();

        let headers = request("/api/users").resolve(&resolver);

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "false");
    }

    #[test]
    fn should_omit_the_credentials_header_when_the_field_is_whitespace_only() {
        let resolver = resolver().rule("/api/*", "https://a.com|||   ").build();

        let headers = request("/api/users").resolve(&resolver);

        assert_no_header(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS);
    }
}

mod sparse_settings {
    use super::*;

    #[test]
    fn should_emit_only_the_methods_header_when_other_fields_are_empty() {
        let resolver = resolver().rule("/api/*", "|PUT, PATCH||").build();

        let headers = request("/api/users").resolve(&resolver);

        assert_eq!(headers.len(), 1);
        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_METHODS, "PUT, PATCH");
    }

    #[test]
    fn should_ignore_surplus_fields_when_settings_have_more_than_four() {
        let resolver = resolver()
            .rule("/api/*", "https://a.com|GET|X-One|true|surplus|junk")
            .build();

        let headers = request("/api/users").resolve(&resolver);

        assert_eq!(headers.len(), 4);
        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    }
}
