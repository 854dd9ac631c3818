// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Float gauges and their one-time declaration

use std::collections::HashSet;
use std::sync::atomic::AtomicU64;

use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

use crate::error::{AppError, Result};
use crate::metrics::labels::{DeviceLabels, LabelPairs};

/// Gauge storing an `f64` in an atomic
pub type FloatGauge = Gauge<f64, AtomicU64>;

#[derive(Clone, Debug)]
enum Series {
    /// Exported without labels
    Plain(FloatGauge),
    /// Exported with the startup label set
    Labeled(Family<LabelPairs, FloatGauge>),
}

/// Handle to a declared gauge
///
/// Cloning is cheap; every clone writes the same series.
#[derive(Clone, Debug)]
pub struct GaugeHandle {
    name: String,
    series: Series,
}

impl GaugeHandle {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overwrites the value stored for `labels`
    pub fn set(&self, labels: &DeviceLabels, value: f64) {
        match &self.series {
            Series::Plain(gauge) => {
                gauge.set(value);
            }
            Series::Labeled(family) => {
                family.get_or_create(labels.pairs()).set(value);
            }
        }
    }

    /// Current value stored for `labels`
    #[must_use]
    pub fn get(&self, labels: &DeviceLabels) -> f64 {
        match &self.series {
            Series::Plain(gauge) => gauge.get(),
            Series::Labeled(family) => family.get_or_create(labels.pairs()).get(),
        }
    }
}

/// Declares gauges into a registry, refusing duplicate names
///
/// The label set decides the series shape: an empty set produces plain
/// gauges, anything else a labeled family with the series pre-created so it
/// is exported from the first scrape.
pub struct GaugeDeclarer<'a> {
    registry: &'a mut Registry,
    labels: &'a DeviceLabels,
    declared: HashSet<String>,
}

impl<'a> GaugeDeclarer<'a> {
    pub fn new(registry: &'a mut Registry, labels: &'a DeviceLabels) -> Self {
        Self {
            registry,
            labels,
            declared: HashSet::new(),
        }
    }

    /// Registers a gauge called `name`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MetricRegistration`] if `name` was already declared
    /// or is not a valid metric name.
    pub fn declare_gauge(&mut self, name: &str, help: &str) -> Result<GaugeHandle> {
        if !is_valid_metric_name(name) {
            return Err(AppError::MetricRegistration(format!(
                "invalid metric name '{name}'"
            )));
        }
        if !self.declared.insert(name.to_string()) {
            return Err(AppError::MetricRegistration(format!(
                "duplicate metric name '{name}'"
            )));
        }

        let series = if self.labels.is_empty() {
            let gauge = FloatGauge::default();
            self.registry.register(name, help, gauge.clone());
            Series::Plain(gauge)
        } else {
            let family = Family::<LabelPairs, FloatGauge>::default();
            let _ = family.get_or_create(self.labels.pairs());
            self.registry.register(name, help, family.clone());
            Series::Labeled(family)
        };

        Ok(GaugeHandle {
            name: name.to_string(),
            series,
        })
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
