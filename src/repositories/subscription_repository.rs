use crate::models::subscription::{Subscription, SubscriptionStatus};
use crate::utils::errors::AppResult;
use sqlx::PgConnection;

pub struct SubscriptionRepository<'c> {
    db: &'c mut PgConnection,
}

impl<'c> SubscriptionRepository<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &mut self,
        company_id: i64,
        plan_id: i64,
        seats_total: i32,
    ) -> AppResult<Subscription> {
        let result = sqlx::query_as::<_, Subscription>(
            r#"
            INSERT INTO subscriptions (company_id, plan_id, seats_total)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(plan_id)
        .bind(seats_total)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result)
    }

    /// Suscripción vigente de la company: la más reciente con status 'active'.
    /// Suscripciones canceladas o morosas no cuentan para la policy.
    pub async fn find_active_by_company(
        &mut self,
        company_id: i64,
    ) -> AppResult<Option<Subscription>> {
        let result = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT * FROM subscriptions
            WHERE company_id = $1 AND status = 'active'
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(company_id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn find_by_company(&mut self, company_id: i64) -> AppResult<Option<Subscription>> {
        let result = sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE company_id = $1 ORDER BY id DESC LIMIT 1",
        )
        .bind(company_id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn update(
        &mut self,
        id: i64,
        seats_total: Option<i32>,
        status: Option<SubscriptionStatus>,
    ) -> AppResult<Subscription> {
        let result = sqlx::query_as::<_, Subscription>(
            r#"
            UPDATE subscriptions
            SET seats_total = COALESCE($2, seats_total),
                status = COALESCE($3, status)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(seats_total)
        .bind(status)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result)
    }
}
