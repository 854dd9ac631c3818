//! Awair local API client module
//!
//! This module talks to the sensor's local HTTP API: a one-time device
//! configuration fetch and the latest air-data measurement polled every tick.

mod client;
mod types;

// Re-export public types and functions
pub use client::AwairClient;
pub use types::{AirData, DeviceConfig};
