// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Fake Awair sensor serving switchable responses on a random local port

#![allow(dead_code)]

use awair_exporter::Config;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const LATEST_BODY: &str = r#"{
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

pub const CONFIG_BODY: &str = r#"{
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

struct Endpoint {
    status: StatusCode,
    body: String,
    hits: usize,
}

impl Endpoint {
    fn new(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            hits: 0,
        }
    }

    fn respond(&mut self) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
        self.hits += 1;
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body.clone(),
        )
    }
}

struct SensorState {
    latest: Endpoint,
    config: Endpoint,
}

#[derive(Clone)]
pub struct FakeSensor {
    state: Arc<Mutex<SensorState>>,
    addr: SocketAddr,
}

impl FakeSensor {
    /// Binds 127.0.0.1:0 and serves the default documents
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(SensorState {
            latest: Endpoint::new(LATEST_BODY),
            config: Endpoint::new(CONFIG_BODY),
        }));

        let app = Router::new()
            .route("/air-data/latest", get(latest_handler))
            .route("/settings/config/data", get(config_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { state, addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Config for this sensor with a short interval, scrape server on a random port
    pub fn config(&self) -> Config {
        let mut config = Config::new(&self.base_url()).unwrap();
        config.poll_interval = Duration::from_secs(5);
        config.request_timeout = Duration::from_secs(2);
        config.server_addr = "127.0.0.1:0".to_string();
        config
    }

    pub fn set_latest(&self, status: StatusCode, body: &str) {
        let mut state = self.state.lock().unwrap();
        state.latest.status = status;
        state.latest.body = body.to_string();
    }

    pub fn set_config(&self, status: StatusCode, body: &str) {
        let mut state = self.state.lock().unwrap();
        state.config.status = status;
        state.config.body = body.to_string();
    }

    pub fn latest_hits(&self) -> usize {
        self.state.lock().unwrap().latest.hits
    }

    pub fn config_hits(&self) -> usize {
        self.state.lock().unwrap().config.hits
    }
}

async fn latest_handler(State(state): State<Arc<Mutex<SensorState>>>) -> impl IntoResponse {
    state.lock().unwrap().latest.respond()
}

async fn config_handler(State(state): State<Arc<Mutex<SensorState>>>) -> impl IntoResponse {
    state.lock().unwrap().config.respond()
}

/// Address on 127.0.0.1 that nothing listens on
pub async fn unused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Value of the series for `name` in an exposition body
pub fn sample_value(body: &str, name: &str) -> Option<f64> {
    body.lines()
        .filter(|line| !line.starts_with('#'))
        .find(|line| {
            line.strip_prefix(name)
                .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('{'))
        })
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}
