//! Modelo de Plan
//!
//! Planes de licenciamiento: cada plan define el mínimo de puestos
//! (included_seats) que una suscripción debe contratar.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Plan principal - mapea exactamente a la tabla plans
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub included_seats: i32,
}

fn default_included_seats() -> i32 {
    3
}

/// Request para crear un nuevo plan
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(
        length(min = 1, max = 120),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub name: String,

    #[validate(range(min = 1))]
    #[serde(default = "default_included_seats")]
    pub included_seats: i32,
}

/// Response de plan para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub included_seats: i32,
}

/// Filtros para listado de planes
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFilters {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            included_seats: plan.included_seats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_included_seats() {
        let request: CreatePlanRequest = serde_json::from_str(r#"{"name": "Pro"}"#).unwrap();
        assert_eq!(request.included_seats, 3);
        assert!(request.validate().is_ok());
    }
}
