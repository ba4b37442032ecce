//! Route definitions and middleware assembly.
//!
//! ## Routes
//!
//! - `GET /` - Snippet listing (session-enabled)
//! - `GET /snippet/view/{id}` - Snippet detail or 404 (session-enabled)
//! - `GET /snippet/create` - Submission form (session-enabled)
//! - `POST /snippet/create` - Validate and create (session-enabled)
//! - `GET /static/...` - Static assets from the configured directory
//! - `GET /health` - Health check (JSON)
//!
//! A request with an unregistered method on a registered path gets a 405
//! with an `Allow` header from the method router; everything else falls
//! through to the 404 page.

mod health;
mod home;
mod snippet;

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::error::WebError;
use crate::middleware::{add_security_headers, handle_panic};
use crate::state::AppState;

/// Build the complete application router.
///
/// Layer order, outer to inner: panic recovery, security headers, then
/// per-route session load/save on the page routes only.
pub fn router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    // Dynamic page routes: these carry the session middleware.
    let pages = Router::new()
        .route("/", get(home::home))
        .route("/snippet/view/{id}", get(snippet::view))
        .route(
            "/snippet/create",
            get(snippet::create_form).post(snippet::create_post),
        )
        .layer(session_layer);

    Router::new()
        .merge(pages)
        .route("/health", get(health::health_check))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(not_found)
        .layer(axum::middleware::map_response(add_security_headers))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// 404 page for paths that match no route.
async fn not_found() -> WebError {
    WebError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::store::SnippetStore;

    async fn test_state() -> AppState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = SnippetStore::with_pool(pool).await.unwrap();

        AppState {
            store,
            config: Arc::new(Config {
                bind_addr: "127.0.0.1:0".to_string(),
                database_url: "sqlite::memory:".to_string(),
                static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../ui/static").to_string(),
                site_name: "Cortex Cache".to_string(),
            }),
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn home_renders_empty_listing() {
        let app = router(test_state().await);

        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("nothing to see here"));
    }

    #[tokio::test]
    async fn pages_carry_security_headers() {
        let app = router(test_state().await);

        let response = app.oneshot(get_request("/")).await.unwrap();
        let headers = response.headers();
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "deny");
        assert_eq!(
            headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
    }

    #[tokio::test]
    async fn view_rejects_malformed_ids_as_not_found() {
        let app = router(test_state().await);

        for uri in ["/snippet/view/0", "/snippet/view/-1", "/snippet/view/abc"] {
            let response = app.clone().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");
        }
    }

    #[tokio::test]
    async fn view_missing_snippet_is_not_found() {
        let app = router(test_state().await);

        let response = app.oneshot(get_request("/snippet/view/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_falls_through_to_404() {
        let app = router(test_state().await);

        let response = app.oneshot(get_request("/no/such/page")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_form_renders() {
        let app = router(test_state().await);

        let response = app.oneshot(get_request("/snippet/create")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Publish snippet"));
    }

    #[tokio::test]
    async fn wrong_method_yields_405_with_allow() {
        let app = router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/snippet/create")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let allow = response
            .headers()
            .get(header::ALLOW)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(allow.contains("POST"), "allow header was {allow:?}");
    }

    #[tokio::test]
    async fn invalid_expiry_rerenders_form_and_persists_nothing() {
        let state = test_state().await;
        let app = router(state.clone());

        let response = app
            .oneshot(form_post("/snippet/create", "title=T&content=C&expires=3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_text(response).await;
        assert!(body.contains("This field must equal 1, 7 or 365"));
        assert!(body.contains(r#"value="T""#));

        assert!(state.store.latest().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn overlong_title_rerenders_form() {
        let app = router(test_state().await);
        let body = format!("title={}&content=C&expires=7", "a".repeat(101));

        let response = app.oneshot(form_post("/snippet/create", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            body_text(response)
                .await
                .contains("cannot be more than 100 characters")
        );
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = router(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/snippet/create")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("not a form"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_submission_redirects_to_new_snippet() {
        let app = router(test_state().await);

        let response = app
            .clone()
            .oneshot(form_post(
                "/snippet/create",
                "title=O+snail&content=Climb+Mount+Fuji&expires=7",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(location, "/snippet/view/1");

        let view = app.oneshot(get_request(&location)).await.unwrap();
        assert_eq!(view.status(), StatusCode::OK);
        let body = body_text(view).await;
        assert!(body.contains("O snail"));
        assert!(body.contains("Climb Mount Fuji"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(test_state().await);

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn static_assets_served_with_prefix_stripped() {
        let app = router(test_state().await);

        let response = app.oneshot(get_request("/static/favicon.svg")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
