//! Error types for Awair Exporter application

use thiserror::Error;

/// Main application error type
///
/// Every variant is fatal: it is only produced during startup, before the
/// poll loop and the scrape server are running.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Device configuration could not be fetched from the sensor
    #[error("Device configuration fetch failed: {0}")]
    DeviceConfig(#[source] FetchError),

    /// Duplicate or invalid metric declaration
    #[error("Metric registration error: {0}")]
    MetricRegistration(String),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// HTTP client construction error
    #[error("HTTP client error")]
    HttpClient(#[source] reqwest::Error),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Failure of a single request against the sensor API
///
/// Fatal when returned by the device configuration fetch, dropped after a log
/// line when returned by a poll tick.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (refused, timed out, DNS, body read)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The sensor answered with a non-success status
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The body is not a JSON document of the expected shape
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
