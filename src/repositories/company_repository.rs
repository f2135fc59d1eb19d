use crate::models::company::{Company, CompanyFilters, UpdateCompanyRequest};
use crate::utils::errors::AppResult;
use sqlx::PgConnection;

pub struct CompanyRepository<'c> {
    db: &'c mut PgConnection,
}

impl<'c> CompanyRepository<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    pub async fn create(&mut self, name: &str, vat_number: Option<&str>) -> AppResult<Company> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, vat_number)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(vat_number)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&mut self, id: i64) -> AppResult<Option<Company>> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(result)
    }

    pub async fn find_by_name(&mut self, name: &str) -> AppResult<Option<Company>> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(result)
    }

    pub async fn name_taken(&mut self, name: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE name = $1 AND ($2::bigint IS NULL OR id != $2))",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result.0)
    }

    pub async fn update(&mut self, id: i64, changes: &UpdateCompanyRequest) -> AppResult<Company> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = COALESCE($2, name),
                vat_number = COALESCE($3, vat_number),
                is_active = COALESCE($4, is_active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.vat_number.as_deref())
        .bind(changes.is_active)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(result)
    }

    pub async fn list(&mut self, filters: &CompanyFilters, limit: i64, offset: i64) -> AppResult<Vec<Company>> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            SELECT * FROM companies
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filters.q.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(result)
    }
}
