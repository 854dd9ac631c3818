// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape-side read access to the registry

use prometheus_client::encoding::text::encode;

use crate::error::{AppError, Result};
use crate::metrics::labels::DeviceLabels;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Renders every declared gauge in OpenMetrics text format
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Metrics`] if encoding fails.
    pub fn encode_metrics(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    /// Current value of the gauge called `name` under the startup labels
    #[must_use]
    pub fn gauge_value(&self, name: &str) -> Option<f64> {
        self.gauges
            .all()
            .into_iter()
            .find(|gauge| gauge.name() == name)
            .map(|gauge| gauge.get(&self.labels))
    }

    /// Names of all declared gauges, in declaration order
    #[must_use]
    pub fn gauge_names(&self) -> Vec<&str> {
        self.gauges.all().into_iter().map(|g| g.name()).collect()
    }

    /// Label set fixed at construction
    #[must_use]
    pub fn labels(&self) -> &DeviceLabels {
        &self.labels
    }
}
