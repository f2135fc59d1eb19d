//! Rutas de la API
//!
//! Cada recurso arma su propio `Router<AppState>`; `create_app_router`
//! los compone en la aplicación completa.

use axum::Router;

use crate::state::AppState;

pub mod company_routes;
pub mod plan_routes;
pub mod system_routes;
pub mod user_routes;

pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .merge(system_routes::create_system_router())
        .nest("/plans", plan_routes::create_plan_router())
        .nest(
            "/companies",
            company_routes::create_company_router().merge(user_routes::create_user_router()),
        )
}
