use awair_exporter::{Config, Exporter, Result};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    tracing::info!(
        "Polling {} every {} (timeout {}, device labels {})",
        config.awair_url,
        humantime::format_duration(config.poll_interval),
        humantime::format_duration(config.request_timeout),
        if config.device_labels { "on" } else { "off" }
    );

    // Shutdown channel (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let exporter = Exporter::bootstrap(config).await?;
    exporter.run(shutdown_rx).await
}

fn setup_tracing() {
    // RUST_LOG wins; otherwise default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
