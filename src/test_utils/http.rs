//! Assertions about handler responses.

use axum::{
    body::Body,
    http::{StatusCode, header::LOCATION},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

/// Assert that `response` tells htmx to load `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header_text(response, "hx-redirect"), endpoint);
}

/// Assert that `response` is a plain "303 See Other" to `endpoint`.
#[track_caller]
pub(crate) fn assert_see_other(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header_text(response, LOCATION.as_str()), endpoint);
}

#[track_caller]
fn header_text<'a>(response: &'a Response<Body>, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_else(|| panic!("no readable {name} header"))
}
