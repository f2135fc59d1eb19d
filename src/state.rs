//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::seat_policy::SeatPolicy;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub seat_policy: SeatPolicy,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            seat_policy: SeatPolicy::new(),
        }
    }
}
