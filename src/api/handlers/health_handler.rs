//! Health check handler.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::api::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: StorageHealth,
}

/// Backing store status
#[derive(Debug, Serialize)]
pub struct StorageHealth {
    pub backend: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint - pings the database when one is configured
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match &state.database {
        Some(database) => match database.ping().await {
            Ok(()) => StorageHealth {
                backend: "postgres",
                status: "healthy",
                error: None,
            },
            Err(e) => StorageHealth {
                backend: "postgres",
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        },
        None => StorageHealth {
            backend: "memory",
            status: "healthy",
            error: None,
        },
    };

    let healthy = storage.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        storage,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
