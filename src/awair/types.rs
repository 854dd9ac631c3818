// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for the Awair local API documents

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One measurement returned by `GET /air-data/latest`
///
/// Every field is required: a document missing any of them, or carrying a
/// value of the wrong type, fails to decode as a whole.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirData {
    /// Sensor-side sample time; decoded but not exported
    pub timestamp: DateTime<FixedOffset>,
    pub score: f64,
    pub dew_point: f64,
    pub temp: f64,
    pub humid: f64,
    pub abs_humid: f64,
    pub co2: f64,
    pub co2_est: f64,
    pub co2_est_baseline: f64,
    pub voc: f64,
    pub voc_baseline: f64,
    pub voc_h2_raw: f64,
    pub voc_ethanol_raw: f64,
    pub pm25: f64,
    pub pm10_est: f64,
}

/// Device settings returned by `GET /settings/config/data`
///
/// Only `device_uuid` and `ip` are used (as metric labels); the rest is kept
/// for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    pub device_uuid: String,
    pub ip: String,
    #[serde(default)]
    pub wifi_mac: String,
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub fw_version: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATEST: &str = r#"{
        "timestamp": "2025-04-10T15:38:24.111Z",
        "score": 82.5,
        "dew_point": 14.47,
        "temp": 23.6,
        "humid": 46.92,
        "abs_humid": 10.1,
        "co2": 450,
        "co2_est": 412,
        "co2_est_baseline": 35741,
        "voc": 118,
        "voc_baseline": 37147,
        "voc_h2_raw": 27,
        "voc_ethanol_raw": 37,
        "pm25": 3,
        "pm10_est": 4
    }"#;

    #[test]
    fn test_air_data_deserialize() {
        let data: AirData = serde_json::from_str(LATEST).unwrap();
        assert_eq!(data.score, 82.5);
        assert_eq!(data.dew_point, 14.47);
        assert_eq!(data.co2, 450.0);
        assert_eq!(data.voc_baseline, 37147.0);
        assert_eq!(data.pm10_est, 4.0);
        assert_eq!(data.timestamp.to_rfc3339(), "2025-04-10T15:38:24.111+00:00");
    }

    #[test]
    fn test_air_data_ignores_unknown_fields() {
        let mut doc: serde_json::Value = serde_json::from_str(LATEST).unwrap();
        doc["lux"] = serde_json::json!(120.4);
        let data: AirData = serde_json::from_value(doc).unwrap();
        assert_eq!(data.score, 82.5);
    }

    #[test]
    fn test_air_data_missing_field_fails() {
        let mut doc: serde_json::Value = serde_json::from_str(LATEST).unwrap();
        doc.as_object_mut().unwrap().remove("pm25");
        let err = serde_json::from_value::<AirData>(doc).unwrap_err();
        assert!(err.to_string().contains("pm25"));
    }

    #[test]
    fn test_air_data_type_mismatch_fails() {
        let mut doc: serde_json::Value = serde_json::from_str(LATEST).unwrap();
        doc["co2"] = serde_json::json!("high");
        assert!(serde_json::from_value::<AirData>(doc).is_err());
    }

    #[test]
    fn test_air_data_invalid_timestamp_fails() {
        let mut doc: serde_json::Value = serde_json::from_str(LATEST).unwrap();
        doc["timestamp"] = serde_json::json!("yesterday");
        assert!(serde_json::from_value::<AirData>(doc).is_err());
    }

    #[test]
    fn test_air_data_rejects_non_object() {
        assert!(serde_json::from_str::<AirData>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<AirData>("null").is_err());
    }

    #[test]
    fn test_device_config_deserialize() {
        let json = r#"{
            "device_uuid": "awair-element_5366",
            "wifi_mac": "70:88:6B:14:BE:C9",
            "ssid": "home",
            "ip": "192.168.1.42",
            "netmask": "255.255.255.0",
            "gateway": "none",
            "fw_version": "1.2.8",
            "timezone": "America/Los_Angeles",
            "display": "score"
        }"#;

        let config: DeviceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.device_uuid, "awair-element_5366");
        assert_eq!(config.ip, "192.168.1.42");
        assert_eq!(config.fw_version, "1.2.8");
        assert_eq!(config.display, "score");
    }

    #[test]
    fn test_device_config_optional_fields_default() {
        let json = r#"{"device_uuid": "awair-omni_1", "ip": "10.0.0.5"}"#;
        let config: DeviceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.device_uuid, "awair-omni_1");
        assert!(config.wifi_mac.is_empty());
        assert!(config.timezone.is_empty());
    }

    #[test]
    fn test_device_config_requires_identity() {
        assert!(serde_json::from_str::<DeviceConfig>(r#"{"ip": "10.0.0.5"}"#).is_err());
        assert!(serde_json::from_str::<DeviceConfig>(r#"{"device_uuid": "x"}"#).is_err());
    }
}
