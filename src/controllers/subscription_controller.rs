use crate::models::company::CompanyDetailResponse;
use crate::models::plan::PlanResponse;
use crate::models::subscription::{SubscriptionResponse, UpdateSubscriptionRequest};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::plan_repository::PlanRepository;
use crate::repositories::seat_usage::PgSeatUsage;
use crate::repositories::subscription_repository::SubscriptionRepository;
use crate::services::seat_policy::SeatPolicy;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct SubscriptionController {
    pool: PgPool,
    policy: SeatPolicy,
}

impl SubscriptionController {
    pub fn new(pool: PgPool, policy: SeatPolicy) -> Self {
        Self { pool, policy }
    }

    /// Cambia seats y/o status de la suscripción activa de la company.
    /// Reducir seats por debajo de los usuarios activos es 409.
    pub async fn update(
        &self,
        company_id: i64,
        request: UpdateSubscriptionRequest,
    ) -> Result<CompanyDetailResponse, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;

        let company = CompanyRepository::new(&mut tx)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| not_found_error("Company", company_id))?;

        let subscription = SubscriptionRepository::new(&mut tx)
            .find_active_by_company(company_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Active subscription for company '{}' not found",
                    company_id
                ))
            })?;

        if let Some(new_seats) = request.seats_total {
            let mut usage = PgSeatUsage::new(&mut tx);
            self.policy
                .validate_seat_reduction(&mut usage, company_id, new_seats)
                .await?;
        }

        let updated = SubscriptionRepository::new(&mut tx)
            .update(subscription.id, request.seats_total, request.status)
            .await?;

        let plan = PlanRepository::new(&mut tx).find_by_id(updated.plan_id).await?;

        tx.commit().await?;

        Ok(CompanyDetailResponse {
            company: company.into(),
            subscription: Some(SubscriptionResponse::from(updated)),
            plan: plan.map(PlanResponse::from),
        })
    }
}
