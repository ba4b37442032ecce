//! Error types for the web application.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. Storage and session
//! failures are logged here, at the response boundary, and the client
//! sees only a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Web application error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The requested snippet does not exist or has expired, or the path
    /// matched no route.
    #[error("not found")]
    NotFound,

    /// The request body could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Storage failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session load/save failure.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error (rendering, startup, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The snippet you were looking for doesn't exist or has expired.".to_string(),
            ),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("The request could not be understood: {msg}"),
            ),
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error",
                    "Something went wrong on our end. Please try again later.".to_string(),
                )
            }
            Self::Session(err) => {
                tracing::error!(error = %err, "session error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error",
                    "Something went wrong on our end. Please try again later.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error",
                    "Something went wrong on our end. Please try again later.".to_string(),
                )
            }
        };

        (status, error_page(title, &message)).into_response()
    }
}

/// Render a standalone HTML error page.
///
/// Shared with the panic-recovery middleware, which has no `WebError`
/// value to convert.
pub fn error_page(title: &str, message: &str) -> maud::Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — Cortex Cache" }
                meta name="robots" content="noindex";
                style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
            }
            body {
                main class="error-page" {
                    h1 { (title) }
                    p { (message) }
                    a href="/" { "Back to Cortex Cache" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_found() {
        assert_eq!(WebError::NotFound.to_string(), "not found");
    }

    #[test]
    fn error_display_bad_request() {
        let err = WebError::BadRequest("unreadable form".to_string());
        assert_eq!(err.to_string(), "bad request: unreadable form");
    }

    #[test]
    fn error_display_internal() {
        let err = WebError::Internal(anyhow::anyhow!("something broke"));
        assert_eq!(err.to_string(), "internal error: something broke");
    }

    #[test]
    fn error_into_response_not_found() {
        let response = WebError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_into_response_bad_request() {
        let response = WebError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_into_response_internal() {
        let response = WebError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_page_escapes_dynamic_text() {
        let markup = error_page("Oops", "<script>alert(1)</script>");
        assert!(!markup.into_string().contains("<script>alert"));
    }
}
