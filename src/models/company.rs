//! Modelo de Company
//!
//! Este módulo contiene el struct Company y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use chrono::{DateTime, Utc};

use crate::models::plan::PlanResponse;
use crate::models::subscription::SubscriptionResponse;

/// Company principal - mapea exactamente a la tabla companies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub vat_number: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_plan_name() -> String {
    "Base".to_string()
}

fn default_seats_total() -> i32 {
    3
}

/// Request para crear una nueva company con su suscripción inicial
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_vat_number")]
    pub vat_number: Option<String>,

    #[validate(
        length(min = 1, max = 120),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    #[serde(default = "default_plan_name")]
    pub plan_name: String,

    #[validate(range(min = 1))]
    #[serde(default = "default_seats_total")]
    pub seats_total: i32,
}

/// Request para actualizar una company existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub name: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_vat_number")]
    pub vat_number: Option<String>,

    pub is_active: Option<bool>,
}

/// Response de company para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    pub vat_number: Option<String>,
    pub is_active: bool,
}

/// Response de creación: company + plan + seats contratados
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCreateResponse {
    pub company_id: i64,
    pub plan: String,
    pub seats_total: i32,
}

/// Vista detallada: company con su suscripción activa y plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyResponse,
    pub subscription: Option<SubscriptionResponse>,
    pub plan: Option<PlanResponse>,
}

/// Uso de licencias de una company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyUsageResponse {
    pub company_id: i64,
    pub active_users: i64,
    pub seats_total: i64,
    pub available_seats: i64,
}

/// Filtros para búsqueda de companies
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyFilters {
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            vat_number: company.vat_number,
            is_active: company.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_plan_and_seats() {
        let request: CreateCompanyRequest =
            serde_json::from_str(r#"{"name": "Demo Srl"}"#).unwrap();
        assert_eq!(request.plan_name, "Base");
        assert_eq!(request.seats_total, 3);
        assert!(request.validate().is_ok());
    }
}
