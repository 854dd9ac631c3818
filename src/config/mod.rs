// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for Awair Exporter application
//!
//! Loads and validates configuration from environment variables.

use std::time::Duration;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const SERVER_ADDR: &str = "0.0.0.0:8181";
    pub const POLL_INTERVAL: Duration = Duration::from_secs(30);
    pub const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEVICE_LABELS: bool = true;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const AWAIR_URL: &str = "AWAIR_URL";
    pub const POLL_DURATION: &str = "POLL_DURATION";
    pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
    pub const DEVICE_LABELS: &str = "DEVICE_LABELS";
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
}

/// Sensor API paths, relative to the base URL
pub mod paths {
    pub const LATEST_AIR_DATA: &str = "/air-data/latest";
    pub const DEVICE_CONFIG: &str = "/settings/config/data";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Sensor base URL without a trailing slash
    pub awair_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    /// Attach `device_uuid`/`ip` labels fetched from the device at startup
    pub device_labels: bool,
    pub server_addr: String,
}

impl Config {
    /// Creates a configuration for the given sensor with default settings
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `awair_url` is not an absolute
    /// `http`/`https` URL.
    pub fn new(awair_url: &str) -> Result<Self> {
        Ok(Config {
            awair_url: normalize_base_url(awair_url)?,
            poll_interval: defaults::POLL_INTERVAL,
            request_timeout: default_request_timeout(defaults::POLL_INTERVAL),
            device_labels: defaults::DEVICE_LABELS,
            server_addr: defaults::SERVER_ADDR.to_string(),
        })
    }

    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `AWAIR_URL` is missing or any variable
    /// is present but invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Only an empty value counts as unset; blanks are parsed and rejected
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let awair_url = var(env_vars::AWAIR_URL).ok_or_else(|| {
            AppError::Config(format!(
                "{} must be set to the sensor base URL",
                env_vars::AWAIR_URL
            ))
        })?;
        let mut config = Config::new(&awair_url)?;

        if let Some(raw) = var(env_vars::POLL_DURATION) {
            config.poll_interval = parse_duration(env_vars::POLL_DURATION, &raw)?;
        }

        config.request_timeout = match var(env_vars::REQUEST_TIMEOUT) {
            Some(raw) => parse_duration(env_vars::REQUEST_TIMEOUT, &raw)?,
            None => default_request_timeout(config.poll_interval),
        };

        if let Some(raw) = var(env_vars::DEVICE_LABELS) {
            config.device_labels = parse_bool(env_vars::DEVICE_LABELS, &raw)?;
        }

        if let Some(addr) = var(env_vars::SERVER_ADDR) {
            config.server_addr = addr;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the request timeout is zero or not
    /// strictly shorter than the poll interval.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            return Err(AppError::Config(format!(
                "{} must be greater than zero (derived from {} {})",
                env_vars::REQUEST_TIMEOUT,
                env_vars::POLL_DURATION,
                humantime::format_duration(self.poll_interval),
            )));
        }
        if self.request_timeout >= self.poll_interval {
            return Err(AppError::Config(format!(
                "{} ({}) must be shorter than {} ({})",
                env_vars::REQUEST_TIMEOUT,
                humantime::format_duration(self.request_timeout),
                env_vars::POLL_DURATION,
                humantime::format_duration(self.poll_interval),
            )));
        }
        Ok(())
    }

    /// URL of the latest measurement endpoint
    #[must_use]
    pub fn poll_url(&self) -> String {
        format!("{}{}", self.awair_url, paths::LATEST_AIR_DATA)
    }

    /// URL of the device configuration endpoint
    #[must_use]
    pub fn device_config_url(&self) -> String {
        format!("{}{}", self.awair_url, paths::DEVICE_CONFIG)
    }
}

/// Request timeout used when none is configured: half the poll interval,
/// capped at ten seconds
fn default_request_timeout(poll_interval: Duration) -> Duration {
    (poll_interval / 2).min(defaults::MAX_REQUEST_TIMEOUT)
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed).map_err(|e| {
        AppError::Config(format!(
            "Invalid {} '{}': {}",
            env_vars::AWAIR_URL,
            raw,
            e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(AppError::Config(format!(
            "Invalid {} '{}': expected an http:// or https:// URL",
            env_vars::AWAIR_URL,
            raw
        )));
    }

    Ok(trimmed.to_string())
}

fn parse_duration(name: &str, raw: &str) -> Result<Duration> {
    let trimmed = raw.trim();
    let duration = match humantime::parse_duration(trimmed) {
        Ok(duration) => duration,
        Err(e) => parse_decimal_duration(trimmed)
            .ok_or_else(|| AppError::Config(format!("Invalid {name} '{raw}': {e}")))?,
    };
    if duration.is_zero() {
        return Err(AppError::Config(format!(
            "Invalid {name} '{raw}': must be greater than zero"
        )));
    }
    Ok(duration)
}

/// Go-style durations with fractional components (`1.5m`, `2.5s`, `1h0.5m`)
///
/// Units: `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`. Every number needs a unit.
fn parse_decimal_duration(raw: &str) -> Option<Duration> {
    let mut rest = raw;
    let mut total_nanos = 0f64;
    if rest.is_empty() {
        return None;
    }

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() || number == "." {
            return None;
        }
        let value: f64 = number.parse().ok()?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let unit_nanos = match unit {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };

        total_nanos += value * unit_nanos;
        rest = tail;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nanos = total_nanos.round() as u64;
    (total_nanos.is_finite() && total_nanos < u64::MAX as f64).then(|| Duration::from_nanos(nanos))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "Invalid {name} '{raw}': expected true or false"
        ))),
    }
}
