//! Controllers de la API
//!
//! Orquestan validación, transacciones y policy por recurso; los handlers
//! de las rutas delegan aquí.

pub mod company_controller;
pub mod plan_controller;
pub mod subscription_controller;
pub mod user_controller;
