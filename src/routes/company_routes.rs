use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use crate::controllers::company_controller::CompanyController;
use crate::controllers::subscription_controller::SubscriptionController;
use crate::models::company::{
    CompanyCreateResponse, CompanyDetailResponse, CompanyFilters, CompanyResponse,
    CompanyUsageResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::models::subscription::UpdateSubscriptionRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_company))
        .route("/", get(list_companies))
        .route("/:company_id", get(get_company))
        .route("/:company_id", patch(update_company))
        .route("/:company_id/usage", get(get_company_usage))
        .route("/:company_id/subscription", patch(update_subscription))
}

async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyCreateResponse>), AppError> {
    let controller = CompanyController::new(state.pool.clone(), state.seat_policy);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_companies(
    State(state): State<AppState>,
    Query(filters): Query<CompanyFilters>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone(), state.seat_policy);
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
) -> Result<Json<CompanyDetailResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone(), state.seat_policy);
    let response = controller.detail(company_id).await?;
    Ok(Json(response))
}

async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone(), state.seat_policy);
    let response = controller.update(company_id, request).await?;
    Ok(Json(response))
}

async fn get_company_usage(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
) -> Result<Json<CompanyUsageResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone(), state.seat_policy);
    let response = controller.usage(company_id).await?;
    Ok(Json(response))
}

async fn update_subscription(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Json(request): Json<UpdateSubscriptionRequest>,
) -> Result<Json<CompanyDetailResponse>, AppError> {
    let controller = SubscriptionController::new(state.pool.clone(), state.seat_policy);
    let response = controller.update(company_id, request).await?;
    Ok(Json(response))
}
