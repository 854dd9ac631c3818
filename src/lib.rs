// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Awair Exporter
//!
//! Prometheus exporter for Awair air-quality sensors.
//!
//! This library polls the sensor's local HTTP API on a fixed interval and
//! republishes every reading as a Prometheus gauge, optionally labeled with
//! the device identity fetched once at startup.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `awair`: sensor API client and document types
//! - `config`: configuration management
//! - `error`: error types
//! - `exporter`: startup orchestration
//! - `metrics`: labels, gauges and registry
//! - `poller`: background poll loop
//! - `prelude`: commonly used types and traits

mod api;
mod awair;
mod config;
mod error;
mod exporter;
mod metrics;
mod poller;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, defaults, env_vars};

/// Application error and result types
pub use error::{AppError, FetchError, Result};

/// HTTP API router and state
pub use api::handlers::{HealthResponse, OPENMETRICS_CONTENT_TYPE};
pub use api::{AppState, create_router};

/// Sensor client and documents
pub use awair::{AirData, AwairClient, DeviceConfig};

/// Startup orchestration
pub use exporter::Exporter;

/// Metrics registry, gauges and labels
pub use metrics::{DeviceLabels, FloatGauge, GaugeDeclarer, GaugeHandle, MetricsRegistry};

/// Poll loop
pub use poller::{poll_once, start_poll_loop};
