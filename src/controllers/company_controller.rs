use crate::models::company::{
    CompanyCreateResponse, CompanyDetailResponse, CompanyFilters, CompanyResponse,
    CompanyUsageResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::models::plan::PlanResponse;
use crate::models::subscription::SubscriptionResponse;
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::plan_repository::PlanRepository;
use crate::repositories::seat_usage::PgSeatUsage;
use crate::repositories::subscription_repository::SubscriptionRepository;
use crate::services::seat_policy::SeatPolicy;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct CompanyController {
    pool: PgPool,
    policy: SeatPolicy,
}

impl CompanyController {
    pub fn new(pool: PgPool, policy: SeatPolicy) -> Self {
        Self { pool, policy }
    }

    /// Alta de company: crea (o reutiliza) el plan y deja la suscripción
    /// inicial activa, todo en una transacción.
    pub async fn create(
        &self,
        request: CreateCompanyRequest,
    ) -> Result<CompanyCreateResponse, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;

        // Verificar que el nombre no exista
        if CompanyRepository::new(&mut tx)
            .name_taken(&request.name, None)
            .await?
        {
            return Err(conflict_error("Company", "name", &request.name));
        }

        let plan = PlanRepository::new(&mut tx)
            .get_or_create(&request.plan_name, request.seats_total)
            .await?;

        // Un plan ya existente fija el piso de seats contratables
        if request.seats_total < plan.included_seats {
            return Err(AppError::Conflict(format!(
                "seats_total {} is below the plan's included seats ({}).",
                request.seats_total, plan.included_seats
            )));
        }

        let company = CompanyRepository::new(&mut tx)
            .create(&request.name, request.vat_number.as_deref())
            .await?;

        SubscriptionRepository::new(&mut tx)
            .create(company.id, plan.id, request.seats_total)
            .await?;

        tx.commit().await?;

        Ok(CompanyCreateResponse {
            company_id: company.id,
            plan: plan.name,
            seats_total: request.seats_total,
        })
    }

    pub async fn list(&self, filters: CompanyFilters) -> Result<Vec<CompanyResponse>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let mut conn = self.pool.acquire().await?;
        let companies = CompanyRepository::new(&mut conn)
            .list(&filters, limit, offset)
            .await?;

        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }

    /// Vista detallada: company + suscripción activa + plan, si existen.
    pub async fn detail(&self, company_id: i64) -> Result<CompanyDetailResponse, AppError> {
        let mut conn = self.pool.acquire().await?;

        let company = CompanyRepository::new(&mut conn)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| not_found_error("Company", company_id))?;

        let subscription = SubscriptionRepository::new(&mut conn)
            .find_active_by_company(company_id)
            .await?;

        let plan = match &subscription {
            Some(sub) => {
                PlanRepository::new(&mut conn)
                    .find_by_id(sub.plan_id)
                    .await?
            }
            None => None,
        };

        Ok(CompanyDetailResponse {
            company: company.into(),
            subscription: subscription.map(SubscriptionResponse::from),
            plan: plan.map(PlanResponse::from),
        })
    }

    pub async fn update(
        &self,
        company_id: i64,
        request: UpdateCompanyRequest,
    ) -> Result<CompanyResponse, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;
        let mut companies = CompanyRepository::new(&mut tx);

        companies
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| not_found_error("Company", company_id))?;

        if let Some(new_name) = &request.name {
            if companies.name_taken(new_name, Some(company_id)).await? {
                return Err(conflict_error("Company", "name", new_name));
            }
        }

        let updated = companies.update(company_id, &request).await?;
        tx.commit().await?;

        Ok(updated.into())
    }

    /// Uso de licencias de la company.
    pub async fn usage(&self, company_id: i64) -> Result<CompanyUsageResponse, AppError> {
        let mut conn = self.pool.acquire().await?;

        CompanyRepository::new(&mut conn)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| not_found_error("Company", company_id))?;

        let mut usage = PgSeatUsage::new(&mut conn);
        let snapshot = self.policy.usage(&mut usage, company_id).await?;

        Ok(CompanyUsageResponse {
            company_id,
            active_users: snapshot.active_users,
            seats_total: snapshot.seats_total,
            available_seats: snapshot.available_seats,
        })
    }
}
