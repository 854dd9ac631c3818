//! Background polling of the sensor
//!
//! A single task fetches the latest measurement on a fixed schedule and
//! writes it into the registry. Failures are logged and dropped: the gauges
//! keep their last good values until a later tick succeeds.

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::awair::AwairClient;
use crate::error::FetchError;
use crate::metrics::MetricsRegistry;

/// Runs one poll tick
///
/// Nothing is written unless the measurement was fetched and decoded in full.
///
/// # Errors
///
/// Returns the [`FetchError`] that abandoned the tick.
pub async fn poll_once(client: &AwairClient, metrics: &MetricsRegistry) -> Result<(), FetchError> {
    let data = client.fetch_latest().await?;
    metrics.update(&data);
    Ok(())
}

/// Starts the background poll loop
///
/// The first tick fires immediately. Ticks keep their phase relative to the
/// schedule; a tick that overruns the interval is followed by one immediate
/// tick and missed ticks are dropped.
pub fn start_poll_loop(
    mut shutdown_rx: watch::Receiver<bool>,
    client: AwairClient,
    metrics: MetricsRegistry,
    interval: Duration,
) -> JoinHandle<()> {
    tracing::info!(
        "Starting background poll loop every {}",
        humantime::format_duration(interval)
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = ticker.tick() => {},
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        tracing::info!("Stopping poll loop");
                        break;
                    }
                    continue;
                }
            }

            let start = Instant::now();
            match poll_once(&client, &metrics).await {
                Ok(()) => {
                    tracing::debug!(
                        "Updated air data in {:.3}s",
                        start.elapsed().as_secs_f64()
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping poll after {:.3}s: {}",
                        start.elapsed().as_secs_f64(),
                        e
                    );
                }
            }
        }
    })
}
