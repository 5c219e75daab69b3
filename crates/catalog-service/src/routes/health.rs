//! Liveness probe.

use axum::Json;
use serde::Serialize;

/// Process liveness; there are no dependencies to degrade, so only `Ok` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Liveness {
    Ok,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: Liveness,
}

/// GET /health — answers as long as the process can serve HTTP.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: Liveness::Ok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness_serializes_lowercase() {
        let body = serde_json::to_value(HealthResponse {
            status: Liveness::Ok,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }
}
