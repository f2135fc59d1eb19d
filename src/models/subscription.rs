//! Modelo de Subscription
//!
//! Una company tiene como máximo una suscripción; seats_total define
//! cuántos usuarios activos admite la policy de licencias.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Estado de una suscripción - mapea al enum PostgreSQL subscription_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "subscription_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
}

/// Subscription principal - mapea exactamente a la tabla subscriptions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub id: i64,
    pub company_id: i64,
    pub plan_id: i64,
    pub seats_total: i32,
    pub status: SubscriptionStatus,
}

/// Request para actualizar la suscripción de una company
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubscriptionRequest {
    #[validate(range(min = 1))]
    pub seats_total: Option<i32>,

    pub status: Option<SubscriptionStatus>,
}

/// Response de subscription para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub company_id: i64,
    pub plan_id: i64,
    pub seats_total: i32,
    pub status: SubscriptionStatus,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            company_id: subscription.company_id,
            plan_id: subscription.plan_id,
            seats_total: subscription.seats_total,
            status: subscription.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SubscriptionStatus::PastDue).unwrap(),
            "\"past_due\""
        );
        assert_eq!(
            serde_json::from_str::<SubscriptionStatus>("\"canceled\"").unwrap(),
            SubscriptionStatus::Canceled
        );
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert!(serde_json::from_str::<SubscriptionStatus>("\"paused\"").is_err());
    }
}
