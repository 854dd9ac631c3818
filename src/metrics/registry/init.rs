// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and gauge registration

use prometheus_client::registry::Registry;
use std::sync::Arc;

use crate::error::Result;
use crate::metrics::gauge::GaugeDeclarer;
use crate::metrics::labels::DeviceLabels;

use super::{AirGauges, MetricsRegistry};

impl MetricsRegistry {
    /// Creates the registry and declares every air-quality gauge
    ///
    /// `labels` is attached to every series for the lifetime of the registry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::MetricRegistration`] if a gauge name is
    /// declared twice.
    pub fn new(labels: DeviceLabels) -> Result<Self> {
        let mut registry = Registry::default();
        let mut declarer = GaugeDeclarer::new(&mut registry, &labels);

        let gauges = AirGauges {
            score: declarer.declare_gauge("awair_score", "Awair score (0-100)")?,
            dew_point: declarer.declare_gauge("awair_dew_point", "Dew point in degrees Celsius")?,
            temp: declarer.declare_gauge("awair_temp", "Temperature in degrees Celsius")?,
            humid: declarer.declare_gauge("awair_humid", "Relative humidity in percent")?,
            abs_humid: declarer.declare_gauge(
                "awair_abs_humid",
                "Absolute humidity in grams per cubic meter",
            )?,
            co2: declarer.declare_gauge("awair_co2", "Carbon dioxide in ppm")?,
            co2_est: declarer.declare_gauge("awair_co2_est", "Estimated carbon dioxide in ppm")?,
            co2_est_baseline: declarer.declare_gauge(
                "awair_co2_est_baseline",
                "Baseline of the estimated carbon dioxide reading",
            )?,
            voc: declarer.declare_gauge(
                "awair_voc",
                "Total volatile organic compounds in ppb",
            )?,
            voc_baseline: declarer.declare_gauge("awair_voc_baseline", "Baseline of the VOC sensor")?,
            voc_h2_raw: declarer.declare_gauge(
                "awair_voc_h2_raw",
                "Raw hydrogen signal of the VOC sensor",
            )?,
            voc_ethanol_raw: declarer.declare_gauge(
                "awair_voc_ethanol_raw",
                "Raw ethanol signal of the VOC sensor",
            )?,
            pm25: declarer.declare_gauge(
                "awair_pm25",
                "PM2.5 particulate matter in micrograms per cubic meter",
            )?,
            pm10_est: declarer.declare_gauge(
                "awair_pm10_est",
                "Estimated PM10 particulate matter in micrograms per cubic meter",
            )?,
        };

        tracing::debug!(
            "Declared {} gauges with {} label(s)",
            gauges.all().len(),
            labels.pairs().len()
        );

        Ok(Self {
            registry: Arc::new(registry),
            labels,
            gauges,
        })
    }
}
