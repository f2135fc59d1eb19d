use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use crate::controllers::user_controller::UserController;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserFilters, UserResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de usuarios; se montan bajo /companies junto al router de companies.
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/:company_id/users", post(create_user))
        .route("/:company_id/users", get(list_users))
        .route("/:company_id/users/:user_id", patch(update_user))
}

async fn create_user(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let controller = UserController::new(state.pool.clone(), state.seat_policy);
    let response = controller.create(company_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_users(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Query(filters): Query<UserFilters>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.seat_policy);
    let response = controller.list(company_id, filters).await?;
    Ok(Json(response))
}

async fn update_user(
    State(state): State<AppState>,
    Path((company_id, user_id)): Path<(i64, i64)>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.seat_policy);
    let response = controller.update(company_id, user_id, request).await?;
    Ok(Json(response))
}
