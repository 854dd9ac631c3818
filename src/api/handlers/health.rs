use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Device the exporter is bound to, when device labels are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_uuid: Option<String>,
}

/// GET /health
///
/// Liveness only: reports "ok" as long as the process serves requests,
/// independent of whether the last poll succeeded.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        device_uuid: state
            .metrics
            .labels()
            .get("device_uuid")
            .map(str::to_string),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::metrics::{DeviceLabels, MetricsRegistry};

    fn state(labels: DeviceLabels) -> Arc<AppState> {
        Arc::new(AppState {
            config: Config::new("http://awair.local").unwrap(),
            metrics: MetricsRegistry::new(labels).unwrap(),
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check(State(state(DeviceLabels::none())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_health_response_omits_missing_device() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            device_uuid: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json.get("device_uuid").is_none());
    }
}
