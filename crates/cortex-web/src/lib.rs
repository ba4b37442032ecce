//! Cortex Cache - server-rendered snippet sharing.
//!
//! This crate provides the HTTP application: users submit short text
//! snippets with a title, body, and expiry period; snippets are stored in
//! a relational database and served back as server-rendered HTML.
//!
//! # Architecture
//!
//! - **Store**: a thin sqlx query layer over a SQLite pool - insert,
//!   get-by-id, list-latest; expiry is enforced in the queries
//! - **Render**: HTML pages generated with maud (compile-time templates,
//!   all dynamic values escaped)
//! - **Routes**: one axum handler per page, translating requests into
//!   store/validation calls
//! - **Middleware**: panic recovery, request tracing, security headers,
//!   and session load/save composed around the router
//!
//! # HTTP surface
//!
//! ```text
//! GET  /                    snippet listing
//! GET  /snippet/view/{id}   snippet detail or 404
//! GET  /snippet/create      submission form
//! POST /snippet/create      validate and create (303 on success)
//! GET  /static/...          static assets
//! GET  /health              health probe (JSON)
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::WebError;
pub use routes::router;
pub use state::AppState;
