//! Intake server: reads configuration from the environment (and `.env`), opens
//! the SQLite database, ensures the applications table exists, and serves the
//! API until Ctrl-C.
//!
//! Run from repo root: `cargo run -p membership-intake-server`

use membership_intake::{build_app, connect, ensure_tables, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("membership_intake=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_tables(&pool).await?;

    let app = build_app(AppState::new(pool.clone()), &config);
    let listener = TcpListener::bind(config.listen_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("listening on http://{}", addr);
    tracing::info!("API endpoints available at http://{}/api", addr);
    if let Some(dir) = &config.static_dir {
        tracing::info!("serving static files from {}", dir.display());
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database connection closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
