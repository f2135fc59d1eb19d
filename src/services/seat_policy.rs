//! Policy de capacidad de licencias
//!
//! Toda mutación que pueda consumir un puesto (alta de usuario, reactivación,
//! reducción de seats) pasa por aquí. La policy lee dos hechos: la suscripción
//! activa de la company y cuántos usuarios activos tiene.
//!
//! El chequeo y la escritura posterior comparten transacción pero no toman
//! locks de fila: dos requests concurrentes pueden pasar el chequeo a la vez
//! y dejar la company un puesto por encima del límite. Limitación conocida.

use async_trait::async_trait;
use serde::Serialize;

use crate::models::subscription::Subscription;
use crate::utils::errors::{AppError, AppResult};

pub const SEAT_LIMIT_MESSAGE: &str = "Seat limit reached. Purchase additional seats.";

/// Interfaz de consulta que necesita la policy. La implementación real va
/// sobre la conexión del request; los tests usan una versión en memoria.
#[async_trait]
pub trait SeatUsageRepository {
    /// Suscripción vigente: la más reciente (id más alto) con status 'active'.
    async fn active_subscription(&mut self, company_id: i64) -> AppResult<Option<Subscription>>;

    /// Cantidad de usuarios con is_active = true de la company.
    async fn active_users_count(&mut self, company_id: i64) -> AppResult<i64>;
}

/// Snapshot de uso de licencias de una company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatUsage {
    pub active_users: i64,
    pub seats_total: i64,
    pub available_seats: i64,
}

/// Servicio de capacidad. Se construye una sola vez y vive en el AppState;
/// cada operación recibe el repositorio del request en el que debe leer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatPolicy;

impl SeatPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Seats contratados por la company; 0 si no hay suscripción activa.
    pub async fn seats_total<R>(&self, usage: &mut R, company_id: i64) -> AppResult<i64>
    where
        R: SeatUsageRepository + Send,
    {
        let subscription = usage.active_subscription(company_id).await?;
        Ok(subscription.map(|s| i64::from(s.seats_total)).unwrap_or(0))
    }

    /// true si queda al menos un puesto libre. Sin suscripción activa
    /// (o con seats_total = 0) siempre es false.
    pub async fn can_add_user<R>(&self, usage: &mut R, company_id: i64) -> AppResult<bool>
    where
        R: SeatUsageRepository + Send,
    {
        let seats_total = self.seats_total(usage, company_id).await?;
        let active_users = usage.active_users_count(company_id).await?;
        Ok(active_users < seats_total)
    }

    /// Variante de `can_add_user` que falla con 409 cuando no hay puestos.
    pub async fn ensure_can_add_user<R>(&self, usage: &mut R, company_id: i64) -> AppResult<()>
    where
        R: SeatUsageRepository + Send,
    {
        if self.can_add_user(usage, company_id).await? {
            Ok(())
        } else {
            Err(AppError::Conflict(SEAT_LIMIT_MESSAGE.to_string()))
        }
    }

    /// Gate para cambios de estado de un usuario. Solo la reactivación
    /// (inactivo a activo) consume un puesto y pasa por `ensure_can_add_user`;
    /// desactivar o repetir el estado actual no toca la capacidad.
    pub async fn ensure_can_set_active<R>(
        &self,
        usage: &mut R,
        company_id: i64,
        currently_active: bool,
        requested_active: bool,
    ) -> AppResult<()>
    where
        R: SeatUsageRepository + Send,
    {
        if requested_active && !currently_active {
            self.ensure_can_add_user(usage, company_id).await?;
        }
        Ok(())
    }

    /// Rechaza cualquier seats_total por debajo de los usuarios activos
    /// actuales. Igualar la cantidad de activos está permitido.
    pub async fn validate_seat_reduction<R>(
        &self,
        usage: &mut R,
        company_id: i64,
        new_seats_total: i32,
    ) -> AppResult<()>
    where
        R: SeatUsageRepository + Send,
    {
        let active_users = usage.active_users_count(company_id).await?;
        if i64::from(new_seats_total) < active_users {
            return Err(AppError::Conflict(format!(
                "Cannot set seats_total to {}: the company has {} active users.",
                new_seats_total, active_users
            )));
        }
        Ok(())
    }

    /// Uso actual de licencias; available_seats nunca es negativo aunque la
    /// company haya quedado por encima del límite por datos históricos.
    pub async fn usage<R>(&self, usage: &mut R, company_id: i64) -> AppResult<SeatUsage>
    where
        R: SeatUsageRepository + Send,
    {
        let seats_total = self.seats_total(usage, company_id).await?;
        let active_users = usage.active_users_count(company_id).await?;
        Ok(SeatUsage {
            active_users,
            seats_total,
            available_seats: (seats_total - active_users).max(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subscription::SubscriptionStatus;

    /// Réplica en memoria de las queries reales: filtra por status 'active'
    /// y desempata por id más alto.
    struct FakeSeatUsage {
        subscriptions: Vec<Subscription>,
        active_users: i64,
    }

    impl FakeSeatUsage {
        fn new(subscriptions: Vec<Subscription>, active_users: i64) -> Self {
            Self {
                subscriptions,
                active_users,
            }
        }
    }

    #[async_trait]
    impl SeatUsageRepository for FakeSeatUsage {
        async fn active_subscription(
            &mut self,
            company_id: i64,
        ) -> AppResult<Option<Subscription>> {
            Ok(self
                .subscriptions
                .iter()
                .filter(|s| s.company_id == company_id && s.status == SubscriptionStatus::Active)
                .max_by_key(|s| s.id)
                .cloned())
        }

        async fn active_users_count(&mut self, _company_id: i64) -> AppResult<i64> {
            Ok(self.active_users)
        }
    }

    fn subscription(id: i64, seats_total: i32, status: SubscriptionStatus) -> Subscription {
        Subscription {
            id,
            company_id: 1,
            plan_id: 1,
            seats_total,
            status,
        }
    }

    #[tokio::test]
    async fn test_no_subscription_means_zero_seats() {
        let policy = SeatPolicy::new();
        let mut usage = FakeSeatUsage::new(vec![], 0);

        assert_eq!(policy.seats_total(&mut usage, 1).await.unwrap(), 0);
        assert!(!policy.can_add_user(&mut usage, 1).await.unwrap());

        let snapshot = policy.usage(&mut usage, 1).await.unwrap();
        assert_eq!(
            snapshot,
            SeatUsage {
                active_users: 0,
                seats_total: 0,
                available_seats: 0
            }
        );
    }

    #[tokio::test]
    async fn test_canceled_subscription_is_invisible() {
        let policy = SeatPolicy::new();
        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 10, SubscriptionStatus::Canceled)],
            0,
        );

        assert_eq!(policy.seats_total(&mut usage, 1).await.unwrap(), 0);
        assert!(!policy.can_add_user(&mut usage, 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_newest_active_subscription_wins() {
        let policy = SeatPolicy::new();
        let mut usage = FakeSeatUsage::new(
            vec![
                subscription(1, 5, SubscriptionStatus::Active),
                subscription(2, 10, SubscriptionStatus::Active),
                subscription(3, 99, SubscriptionStatus::PastDue),
            ],
            0,
        );

        assert_eq!(policy.seats_total(&mut usage, 1).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_can_add_user_below_and_at_limit() {
        let policy = SeatPolicy::new();

        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 3, SubscriptionStatus::Active)],
            2,
        );
        assert!(policy.can_add_user(&mut usage, 1).await.unwrap());

        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 3, SubscriptionStatus::Active)],
            3,
        );
        assert!(!policy.can_add_user(&mut usage, 1).await.unwrap());
        assert!(policy.ensure_can_add_user(&mut usage, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_zero_seat_subscription_never_admits_users() {
        let policy = SeatPolicy::new();
        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 0, SubscriptionStatus::Active)],
            0,
        );

        assert!(!policy.can_add_user(&mut usage, 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_seat_limit_error_is_conflict() {
        let policy = SeatPolicy::new();
        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 1, SubscriptionStatus::Active)],
            1,
        );

        match policy.ensure_can_add_user(&mut usage, 1).await {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, SEAT_LIMIT_MESSAGE),
            other => panic!("expected seat-limit conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reactivation_passes_through_capacity_gate() {
        let policy = SeatPolicy::new();

        // Con los 2 puestos ocupados, reactivar a un usuario inactivo es 409
        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 2, SubscriptionStatus::Active)],
            2,
        );
        match policy.ensure_can_set_active(&mut usage, 1, false, true).await {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, SEAT_LIMIT_MESSAGE),
            other => panic!("expected seat-limit conflict, got {:?}", other),
        }

        // Desactivar a uno libera el puesto: la reactivación vuelve a pasar
        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 2, SubscriptionStatus::Active)],
            1,
        );
        assert!(policy
            .ensure_can_set_active(&mut usage, 1, false, true)
            .await
            .is_ok());
        assert!(policy.ensure_can_add_user(&mut usage, 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_deactivation_and_noop_transitions_skip_the_gate() {
        let policy = SeatPolicy::new();

        // Incluso por encima del límite, desactivar siempre está permitido
        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 2, SubscriptionStatus::Active)],
            3,
        );
        assert!(policy
            .ensure_can_set_active(&mut usage, 1, true, false)
            .await
            .is_ok());

        // Repetir el estado actual no consume puesto nuevo
        assert!(policy
            .ensure_can_set_active(&mut usage, 1, true, true)
            .await
            .is_ok());
        assert!(policy
            .ensure_can_set_active(&mut usage, 1, false, false)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_validate_seat_reduction() {
        let policy = SeatPolicy::new();
        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 5, SubscriptionStatus::Active)],
            3,
        );

        assert!(matches!(
            policy.validate_seat_reduction(&mut usage, 1, 2).await,
            Err(AppError::Conflict(_))
        ));
        assert!(policy.validate_seat_reduction(&mut usage, 1, 3).await.is_ok());
        assert!(policy.validate_seat_reduction(&mut usage, 1, 8).await.is_ok());
    }

    #[tokio::test]
    async fn test_usage_floors_available_seats_at_zero() {
        let policy = SeatPolicy::new();

        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 3, SubscriptionStatus::Active)],
            2,
        );
        let snapshot = policy.usage(&mut usage, 1).await.unwrap();
        assert_eq!(snapshot.available_seats, 1);

        let mut usage = FakeSeatUsage::new(
            vec![subscription(1, 2, SubscriptionStatus::Active)],
            3,
        );
        let snapshot = policy.usage(&mut usage, 1).await.unwrap();
        assert_eq!(snapshot.available_seats, 0);
        assert_eq!(snapshot.active_users, 3);
        assert_eq!(snapshot.seats_total, 2);
    }
}
