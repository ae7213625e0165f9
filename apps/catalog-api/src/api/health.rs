//! Health check endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "catalog-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, String)> {
    if !database::mongodb::check_health(&state.mongo_client).await {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "MongoDB unreachable".to_string(),
        ));
    }

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        service: "catalog-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
