// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Gauge updates from decoded measurements

use crate::awair::AirData;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Writes every field of `data` into its gauge under the startup labels
    ///
    /// The timestamp is not exported.
    pub fn update(&self, data: &AirData) {
        let labels = &self.labels;
        let gauges = &self.gauges;

        gauges.score.set(labels, data.score);
        gauges.dew_point.set(labels, data.dew_point);
        gauges.temp.set(labels, data.temp);
        gauges.humid.set(labels, data.humid);
        gauges.abs_humid.set(labels, data.abs_humid);
        gauges.co2.set(labels, data.co2);
        gauges.co2_est.set(labels, data.co2_est);
        gauges.co2_est_baseline.set(labels, data.co2_est_baseline);
        gauges.voc.set(labels, data.voc);
        gauges.voc_baseline.set(labels, data.voc_baseline);
        gauges.voc_h2_raw.set(labels, data.voc_h2_raw);
        gauges.voc_ethanol_raw.set(labels, data.voc_ethanol_raw);
        gauges.pm25.set(labels, data.pm25);
        gauges.pm10_est.set(labels, data.pm10_est);
    }
}
