use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::plan_controller::PlanController;
use crate::models::plan::{CreatePlanRequest, PlanFilters, PlanResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_plan_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_plan))
        .route("/", get(list_plans))
}

async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<PlanResponse>), AppError> {
    let controller = PlanController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_plans(
    State(state): State<AppState>,
    Query(filters): Query<PlanFilters>,
) -> Result<Json<Vec<PlanResponse>>, AppError> {
    let controller = PlanController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}
