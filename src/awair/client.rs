//! HTTP client for the Awair local API

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{AppError, FetchError};

use super::types::{AirData, DeviceConfig};

/// Awair local API client
///
/// Holds one `reqwest` client (and its connection pool) for the lifetime of
/// the process. Every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct AwairClient {
    http: reqwest::Client,
    poll_url: String,
    device_config_url: String,
}

impl AwairClient {
    /// Creates a client for the sensor named in `config`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("awair-exporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            http,
            poll_url: config.poll_url(),
            device_config_url: config.device_config_url(),
        })
    }

    /// Fetches the device configuration (one request)
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the status is not a
    /// success, or the body does not decode.
    pub async fn fetch_config(&self) -> Result<DeviceConfig, FetchError> {
        self.get_json(&self.device_config_url).await
    }

    /// Fetches the latest measurement (one request)
    ///
    /// # Errors
    ///
    /// Same conditions as [`AwairClient::fetch_config`].
    pub async fn fetch_latest(&self) -> Result<AirData, FetchError> {
        self.get_json(&self.poll_url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // Read the whole body before decoding so a dropped connection is
        // reported as a network error rather than a decode error.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
