//! shopscout HTTP server binary.
//!
//! Listens on `0.0.0.0:$PORT` (default 8080). Set `SHOPSCOUT_CONFIG` to a
//! TOML file to override scraper settings, and `RUST_LOG` to adjust logging.

use shopscout::ServerConfig;
use shopscout::api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    tracing::info!(port = config.port, "shopscout-server starting");

    api::serve(config).await.map_err(|e| {
        tracing::error!(error = %e, "shopscout-server exited with error");
        anyhow::anyhow!("shopscout-server failed: {e}")
    })?;

    Ok(())
}
