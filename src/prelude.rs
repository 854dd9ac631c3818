// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use awair_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, FetchError, Result};
pub use crate::exporter::Exporter;

// Metrics types
pub use crate::metrics::{DeviceLabels, GaugeHandle, MetricsRegistry};

// Awair client
pub use crate::awair::{AirData, AwairClient, DeviceConfig};
