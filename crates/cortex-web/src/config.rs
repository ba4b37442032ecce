//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:4000").
    pub bind_addr: String,

    /// Database connection string for the snippet store.
    pub database_url: String,

    /// Directory served under `/static`.
    pub static_dir: String,

    /// Site name shown in page titles and the nav header.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All keys are optional and default to local-development values:
    /// - `CORTEX_BIND_ADDR`: Server bind address (default: "127.0.0.1:4000")
    /// - `DATABASE_URL`: Store DSN (default: "sqlite:cortex.db?mode=rwc")
    /// - `CORTEX_STATIC_DIR`: Static asset directory (default: "ui/static")
    /// - `CORTEX_SITE_NAME`: Site name (default: "Cortex Cache")
    ///
    /// The `--addr` and `--dsn` process flags override the first two.
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("CORTEX_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:cortex.db?mode=rwc".to_string());

        let static_dir =
            std::env::var("CORTEX_STATIC_DIR").unwrap_or_else(|_| "ui/static".to_string());

        let site_name =
            std::env::var("CORTEX_SITE_NAME").unwrap_or_else(|_| "Cortex Cache".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            database_url = %database_url,
            static_dir = %static_dir,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            static_dir,
            site_name,
        })
    }
}
