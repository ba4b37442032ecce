//! Request-wrapping middleware: panic recovery and security headers.
//!
//! Request logging is a `TraceLayer` applied at the binary edge, and
//! session load/save is the session manager layer in `routes`; both are
//! plain pass-through decorators with no logic of their own.

use std::any::Any;

use axum::body::Body;
use axum::http::{HeaderValue, Response, StatusCode, header};
use axum::response::IntoResponse;

use crate::error::error_page;
use crate::render::components::CSP_HEADER;

/// Convert a caught handler panic into a generic 500 response.
///
/// The panic payload is logged with its message when one is attached;
/// the client sees only the generic error page. The connection is marked
/// non-keep-alive so the peer does not reuse a socket whose handler died
/// mid-request.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked");

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_page(
            "Server Error",
            "Something went wrong on our end. Please try again later.",
        ),
    )
        .into_response();

    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));

    response
}

/// Add security headers to every response.
pub async fn add_security_headers(mut response: axum::response::Response) -> axum::response::Response {
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("origin-when-cross-origin"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("deny"));
    response
}
