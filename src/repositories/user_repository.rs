use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::AppResult;
use sqlx::PgConnection;

pub struct UserRepository<'c> {
    db: &'c mut PgConnection,
}

impl<'c> UserRepository<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    pub async fn create(&mut self, company_id: i64, request: &CreateUserRequest) -> AppResult<User> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (company_id, email, full_name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(&request.email)
        .bind(&request.full_name)
        .bind(&request.role)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id_and_company(
        &mut self,
        user_id: i64,
        company_id: i64,
    ) -> AppResult<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE id = $1 AND company_id = $2",
        )
        .bind(user_id)
        .bind(company_id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn email_exists(&mut self, email: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&mut *self.db)
                .await?;

        Ok(result.0)
    }

    /// Usuarios activos de una company; son los que consumen puestos.
    pub async fn count_active(&mut self, company_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE company_id = $1 AND is_active = TRUE",
        )
        .bind(company_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(count)
    }

    pub async fn set_active(&mut self, user_id: i64, is_active: bool) -> AppResult<User> {
        let result = sqlx::query_as::<_, User>(
            "UPDATE users SET is_active = $2 WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(is_active)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn list_by_company(
        &mut self,
        company_id: i64,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<User>> {
        let result = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE company_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(company_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(result)
    }
}
