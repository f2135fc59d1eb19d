//! Servicio de seed
//!
//! Crea los datos de demo (plan Base, company Demo Srl y su suscripción).
//! Es idempotente: cada paso busca antes de crear.

use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::plan_repository::PlanRepository;
use crate::repositories::subscription_repository::SubscriptionRepository;
use crate::utils::errors::AppResult;

const DEMO_PLAN_NAME: &str = "Base";
const DEMO_PLAN_SEATS: i32 = 3;
const DEMO_COMPANY_NAME: &str = "Demo Srl";
const DEMO_COMPANY_VAT: &str = "IT00000000000";

#[derive(Debug, Clone, Serialize)]
pub struct SeedResponse {
    pub company_id: i64,
    pub plan: String,
}

pub struct SeedService {
    pool: PgPool,
}

impl SeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run(&self) -> AppResult<SeedResponse> {
        let mut tx = self.pool.begin().await?;

        let plan = PlanRepository::new(&mut tx)
            .get_or_create(DEMO_PLAN_NAME, DEMO_PLAN_SEATS)
            .await?;

        let mut companies = CompanyRepository::new(&mut tx);
        let company = match companies.find_by_name(DEMO_COMPANY_NAME).await? {
            Some(existing) => existing,
            None => {
                info!("🌱 Creando company de demo '{}'", DEMO_COMPANY_NAME);
                companies
                    .create(DEMO_COMPANY_NAME, Some(DEMO_COMPANY_VAT))
                    .await?
            }
        };

        let mut subscriptions = SubscriptionRepository::new(&mut tx);
        if subscriptions.find_by_company(company.id).await?.is_none() {
            info!(
                "🌱 Creando suscripción de demo para company {} con {} seats",
                company.id, DEMO_PLAN_SEATS
            );
            subscriptions
                .create(company.id, plan.id, DEMO_PLAN_SEATS)
                .await?;
        }

        tx.commit().await?;

        Ok(SeedResponse {
            company_id: company.id,
            plan: plan.name,
        })
    }
}
