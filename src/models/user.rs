//! Modelo de User
//!
//! Usuarios pertenecen a una company; el email es único a nivel global
//! y solo los usuarios activos consumen puestos de la suscripción.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use chrono::{DateTime, Utc};

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub company_id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_role() -> String {
    "hr_user".to_string()
}

/// Request para crear un nuevo usuario en una company
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub full_name: String,

    #[validate(length(min = 1, max = 32))]
    #[serde(default = "default_role")]
    pub role: String,
}

/// Request para activar o desactivar un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub is_active: bool,
}

/// Response de user para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub company_id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
}

/// Filtros para listado de usuarios de una company
#[derive(Debug, Clone, Deserialize)]
pub struct UserFilters {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            company_id: user.company_id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_role() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"email": "a@b.com", "full_name": "Ada"}"#).unwrap();
        assert_eq!(request.role, "hr_user");
    }

    #[test]
    fn test_create_request_validation() {
        let request = CreateUserRequest {
            email: "not-an-email".to_string(),
            full_name: "Ada Lovelace".to_string(),
            role: "hr_user".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateUserRequest {
            email: "ada@example.com".to_string(),
            full_name: "   ".to_string(),
            role: "hr_user".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateUserRequest {
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            role: "company_admin".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
