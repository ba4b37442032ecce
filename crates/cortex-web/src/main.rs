//! Cortex Cache - HTTP server for server-rendered snippet sharing.

use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cortex_web::{AppState, Config, router};

/// Cortex Cache - share text snippets with an expiry window.
#[derive(Parser, Debug)]
#[command(name = "cortex-web")]
#[command(about = "Server-rendered snippet sharing over HTTP", long_about = None)]
struct Args {
    /// HTTP listen address (overrides CORTEX_BIND_ADDR).
    #[arg(long)]
    addr: Option<String>,

    /// Database connection string (overrides DATABASE_URL).
    #[arg(long)]
    dsn: Option<String>,

    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; flags win over environment
    let mut config = Config::from_env()?;
    if let Some(addr) = args.addr {
        config.bind_addr = addr;
    }
    if let Some(dsn) = args.dsn {
        config.database_url = dsn;
    }
    let bind_addr = config.bind_addr.clone();

    // Create application state (connects the store, ensures the schema)
    let state = AppState::new(config).await?;

    // Build router with request logging
    let app = router(state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting cortex cache server");

    axum::serve(listener, app).await?;

    Ok(())
}
