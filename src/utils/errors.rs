//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Las violaciones de unicidad se traducen a 409: son la red de
        // seguridad a nivel de base de datos de los chequeos de duplicados.
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let message = match db_err.constraint() {
                    Some("users_email_key") => "Email already registered.",
                    Some("companies_name_key") => "Company name already registered.",
                    Some("plans_name_key") => "Plan name already registered.",
                    Some("subscriptions_company_id_key") => {
                        "Company already has a subscription."
                    }
                    _ => "Resource already exists.",
                };
                return AppError::Conflict(message.to_string());
            }
        }
        AppError::Database(err)
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: None,
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: None,
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Company with id '7' not found".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response = AppError::Conflict("Seat limit reached.".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("name", validator::ValidationError::new("length"));
        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_row_not_found_maps_to_500() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_helper_messages() {
        match not_found_error("Company", 42) {
            AppError::NotFound(msg) => assert_eq!(msg, "Company with id '42' not found"),
            other => panic!("unexpected error: {:?}", other),
        }
        match conflict_error("User", "email", "a@b.com") {
            AppError::Conflict(msg) => {
                assert_eq!(msg, "User with email 'a@b.com' already exists")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
