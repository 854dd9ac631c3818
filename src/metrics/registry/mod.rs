// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

mod init;
mod scrape;
mod update;

use crate::metrics::gauge::GaugeHandle;
use crate::metrics::labels::DeviceLabels;
use prometheus_client::registry::Registry;
use std::sync::Arc;

/// One gauge per measured quantity
#[derive(Clone, Debug)]
struct AirGauges {
    score: GaugeHandle,
    dew_point: GaugeHandle,
    temp: GaugeHandle,
    humid: GaugeHandle,
    abs_humid: GaugeHandle,
    co2: GaugeHandle,
    co2_est: GaugeHandle,
    co2_est_baseline: GaugeHandle,
    voc: GaugeHandle,
    voc_baseline: GaugeHandle,
    voc_h2_raw: GaugeHandle,
    voc_ethanol_raw: GaugeHandle,
    pm25: GaugeHandle,
    pm10_est: GaugeHandle,
}

impl AirGauges {
    fn all(&self) -> [&GaugeHandle; 14] {
        [
            &self.score,
            &self.dew_point,
            &self.temp,
            &self.humid,
            &self.abs_humid,
            &self.co2,
            &self.co2_est,
            &self.co2_est_baseline,
            &self.voc,
            &self.voc_baseline,
            &self.voc_h2_raw,
            &self.voc_ethanol_raw,
            &self.pm25,
            &self.pm10_est,
        ]
    }
}

/// Process-wide gauge registry
///
/// Written by the poll loop, read by the scrape handler. The set of gauges
/// is fixed at construction; values are stored in atomics, so clones can be
/// shared across tasks without extra locking.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Registry>,
    labels: DeviceLabels,
    gauges: AirGauges,
}
