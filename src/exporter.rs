// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Startup orchestration
//!
//! Startup is strictly ordered: device labels are resolved (when enabled)
//! before the registry exists, and the listen socket is bound only after
//! that. A failed device configuration fetch therefore never leaves a
//! metrics endpoint behind.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::api::{self, AppState};
use crate::awair::AwairClient;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::metrics::{DeviceLabels, MetricsRegistry};
use crate::poller::start_poll_loop;

/// A fully initialized exporter, bound but not yet serving
pub struct Exporter {
    state: Arc<AppState>,
    client: AwairClient,
    listener: TcpListener,
}

impl Exporter {
    /// Resolves labels, builds the registry, and binds the scrape socket
    ///
    /// # Errors
    ///
    /// - [`AppError::DeviceConfig`] if device labels are enabled and the
    ///   configuration fetch fails
    /// - [`AppError::AddrParse`] / [`AppError::Io`] if the listen address is
    ///   invalid or cannot be bound
    pub async fn bootstrap(config: Config) -> Result<Self> {
        let client = AwairClient::new(&config)?;

        let labels = if config.device_labels {
            let device = client.fetch_config().await.map_err(|e| {
                tracing::error!(
                    "Failed to fetch device configuration from {}: {}",
                    config.device_config_url(),
                    e
                );
                AppError::DeviceConfig(e)
            })?;
            tracing::info!(
                "Sensor {} at {} (firmware {}, ssid '{}')",
                device.device_uuid,
                device.ip,
                device.fw_version,
                device.ssid
            );
            DeviceLabels::from_config(&device)
        } else {
            tracing::info!("Device labels disabled; exporting unlabeled series");
            DeviceLabels::none()
        };

        let metrics = MetricsRegistry::new(labels)?;

        let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
            tracing::error!("Invalid server address: {}", e);
            e
        })?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind address: {}", e);
            e
        })?;

        Ok(Self {
            state: Arc::new(AppState { config, metrics }),
            client,
            listener,
        })
    }

    /// Address the scrape server is bound to
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the socket address cannot be read.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Registry shared by the poll loop and the scrape server
    #[must_use]
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.state.metrics
    }

    /// Starts the poll loop and serves scrapes until `shutdown_rx` flips
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the server fails.
    pub async fn run(self, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
        let addr = self.local_addr()?;

        let poller = start_poll_loop(
            shutdown_rx.clone(),
            self.client,
            self.state.metrics.clone(),
            self.state.config.poll_interval,
        );

        let app = api::create_router(self.state);

        tracing::info!("Awair Exporter starting on {}", addr);
        tracing::info!("Endpoints:");
        tracing::info!("  - GET /health  - Health check");
        tracing::info!("  - GET /metrics - Prometheus metrics");

        let mut server_shutdown = shutdown_rx;
        let served = axum::serve(self.listener, app)
            .with_graceful_shutdown(async move {
                while server_shutdown.changed().await.is_ok() {
                    if *server_shutdown.borrow() {
                        break;
                    }
                }
                tracing::info!("HTTP server shutting down");
            })
            .await
            .map_err(|e| {
                tracing::error!("Server error: {}", e);
                e
            });

        poller.abort();
        Ok(served?)
    }
}
