use crate::models::plan::Plan;
use crate::utils::errors::AppResult;
use sqlx::PgConnection;

pub struct PlanRepository<'c> {
    db: &'c mut PgConnection,
}

impl<'c> PlanRepository<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    pub async fn create(&mut self, name: &str, included_seats: i32) -> AppResult<Plan> {
        let result = sqlx::query_as::<_, Plan>(
            r#"
            INSERT INTO plans (name, included_seats)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(included_seats)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&mut self, id: i64) -> AppResult<Option<Plan>> {
        let result = sqlx::query_as::<_, Plan>("SELECT * FROM plans WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(result)
    }

    pub async fn find_by_name(&mut self, name: &str) -> AppResult<Option<Plan>> {
        let result = sqlx::query_as::<_, Plan>("SELECT * FROM plans WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(result)
    }

    pub async fn name_exists(&mut self, name: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM plans WHERE name = $1)")
                .bind(name)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(result.0)
    }

    /// Busca un plan por nombre; si no existe lo crea con los seats indicados.
    pub async fn get_or_create(&mut self, name: &str, included_seats: i32) -> AppResult<Plan> {
        if let Some(plan) = self.find_by_name(name).await? {
            return Ok(plan);
        }
        self.create(name, included_seats).await
    }

    pub async fn list(&mut self, limit: i64, offset: i64) -> AppResult<Vec<Plan>> {
        let result = sqlx::query_as::<_, Plan>(
            "SELECT * FROM plans ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(result)
    }
}
