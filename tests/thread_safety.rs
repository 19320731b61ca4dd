mod common;

use pathcors::constants::header;
use std::sync::Arc;
use std::thread;

use common::builders::{request, resolver};
use common::headers::header_value;

#[test]
fn resolver_can_be_shared_across_threads() {
    let resolver = Arc::new(
        resolver()
            .rule("/api/*", "<mirror>|GET, POST|X-Thread")
            .rule("/health", "https://probe.example")
            .build(),
    );

    let mut handles = Vec::new();
    for i in 0..8 {
        let resolver = Arc::clone(&resolver);
        handles.push(thread::spawn(move || {
            let origin = format!("https://thread{}.example", i);
            let path = format!("/api/worker/{}", i);

            let headers = request(path).origin(origin.as_str()).resolve(&resolver);

            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.as_str()),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
                Some("X-Thread"),
            );

            let health_headers = request("/health").resolve(&resolver);
            assert_eq!(
                header_value(&health_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some("https://probe.example"),
            );
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}
