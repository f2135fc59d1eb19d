use async_trait::async_trait;
use sqlx::PgConnection;

use crate::models::subscription::Subscription;
use crate::repositories::subscription_repository::SubscriptionRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::seat_policy::SeatUsageRepository;
use crate::utils::errors::AppResult;

/// Adapter PostgreSQL del `SeatUsageRepository` de la policy de licencias.
/// Toma prestada la conexión del request para que los chequeos de capacidad
/// participen de la misma transacción que la escritura.
pub struct PgSeatUsage<'c> {
    db: &'c mut PgConnection,
}

impl<'c> PgSeatUsage<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeatUsageRepository for PgSeatUsage<'_> {
    async fn active_subscription(&mut self, company_id: i64) -> AppResult<Option<Subscription>> {
        SubscriptionRepository::new(&mut *self.db)
            .find_active_by_company(company_id)
            .await
    }

    async fn active_users_count(&mut self, company_id: i64) -> AppResult<i64> {
        UserRepository::new(&mut *self.db)
            .count_active(company_id)
            .await
    }
}
