use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserFilters, UserResponse};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::seat_usage::PgSeatUsage;
use crate::repositories::user_repository::UserRepository;
use crate::services::seat_policy::SeatPolicy;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct UserController {
    pool: PgPool,
    policy: SeatPolicy,
}

impl UserController {
    pub fn new(pool: PgPool, policy: SeatPolicy) -> Self {
        Self { pool, policy }
    }

    /// Alta de usuario. Solo procede si la policy confirma que queda un
    /// puesto libre; el chequeo y el INSERT comparten transacción.
    pub async fn create(
        &self,
        company_id: i64,
        request: CreateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;

        CompanyRepository::new(&mut tx)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| not_found_error("Company", company_id))?;

        // Verificar que el email no exista (es único a nivel global)
        if UserRepository::new(&mut tx).email_exists(&request.email).await? {
            return Err(conflict_error("User", "email", &request.email));
        }

        {
            let mut usage = PgSeatUsage::new(&mut tx);
            self.policy.ensure_can_add_user(&mut usage, company_id).await?;
        }

        let user = UserRepository::new(&mut tx).create(company_id, &request).await?;
        tx.commit().await?;

        Ok(user.into())
    }

    /// Activa o desactiva un usuario. Reactivar vuelve a consumir un puesto,
    /// así que pasa por la policy; desactivar siempre está permitido.
    pub async fn update(
        &self,
        company_id: i64,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;

        CompanyRepository::new(&mut tx)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| not_found_error("Company", company_id))?;

        let user = UserRepository::new(&mut tx)
            .find_by_id_and_company(user_id, company_id)
            .await?
            .ok_or_else(|| not_found_error("User", user_id))?;

        {
            let mut usage = PgSeatUsage::new(&mut tx);
            self.policy
                .ensure_can_set_active(&mut usage, company_id, user.is_active, request.is_active)
                .await?;
        }

        let updated = UserRepository::new(&mut tx)
            .set_active(user_id, request.is_active)
            .await?;
        tx.commit().await?;

        Ok(updated.into())
    }

    pub async fn list(
        &self,
        company_id: i64,
        filters: UserFilters,
    ) -> Result<Vec<UserResponse>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let mut conn = self.pool.acquire().await?;

        CompanyRepository::new(&mut conn)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| not_found_error("Company", company_id))?;

        let users = UserRepository::new(&mut conn)
            .list_by_company(company_id, limit, offset)
            .await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
