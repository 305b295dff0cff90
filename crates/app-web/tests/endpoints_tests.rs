// Host-side tests for endpoint URL helpers.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod endpoints {
    include!("../src/endpoints.rs");
}

use endpoints::*;

#[test]
fn point_detail_url_carries_the_point_id() {
    assert_eq!(point_detail_url(0), "/get_point_data?point_id=0");
    assert_eq!(point_detail_url(42), "/get_point_data?point_id=42");
}

#[test]
fn static_endpoints_are_root_relative() {
    for url in [POINTS_URL, CONFIG_URL, PDF_URL, INDEX_URL] {
        assert!(url.starts_with('/'), "{url} must be root-relative");
    }
}
