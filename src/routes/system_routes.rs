use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::services::seed_service::{SeedResponse, SeedService};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_system_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/seed", post(seed))
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

async fn seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let service = SeedService::new(state.pool.clone());
    let response = service.run().await?;
    Ok(Json(response))
}
