// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update module for Awair Exporter
//!
//! Contains the device label set, float gauge handles, and the Prometheus
//! metrics registry.

mod gauge;
mod labels;
mod registry;


/// Gauge declaration and handles
pub use gauge::{FloatGauge, GaugeDeclarer, GaugeHandle};

/// Device identity labels
pub use labels::{DeviceLabels, LabelPairs};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
