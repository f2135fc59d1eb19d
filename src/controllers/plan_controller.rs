use crate::models::plan::{CreatePlanRequest, PlanFilters, PlanResponse};
use crate::repositories::plan_repository::PlanRepository;
use crate::utils::errors::{conflict_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct PlanController {
    pool: PgPool,
}

impl PlanController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreatePlanRequest) -> Result<PlanResponse, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;
        let mut plans = PlanRepository::new(&mut tx);

        // Verificar que el nombre no exista
        if plans.name_exists(&request.name).await? {
            return Err(conflict_error("Plan", "name", &request.name));
        }

        let plan = plans.create(&request.name, request.included_seats).await?;
        tx.commit().await?;

        Ok(plan.into())
    }

    pub async fn list(&self, filters: PlanFilters) -> Result<Vec<PlanResponse>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let mut conn = self.pool.acquire().await?;
        let plans = PlanRepository::new(&mut conn).list(limit, offset).await?;

        Ok(plans.into_iter().map(PlanResponse::from).collect())
    }
}
