//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::SnippetStore;

/// Shared application state available to all request handlers.
///
/// The store's connection pool is the only shared mutable resource;
/// handlers do not otherwise coordinate.
#[derive(Clone)]
pub struct AppState {
    /// Snippet store over the database pool.
    pub store: SnippetStore,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the application state: connect the store and wrap the config.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = SnippetStore::connect(&config.database_url).await?;

        tracing::info!(database_url = %config.database_url, "application state initialized");

        Ok(Self {
            store,
            config: Arc::new(config),
        })
    }
}
