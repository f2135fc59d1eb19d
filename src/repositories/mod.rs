//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula las queries tipadas de una entidad sobre una
//! conexión prestada, de modo que una transacción de request pueda abarcar
//! varios repositorios.

pub mod company_repository;
pub mod plan_repository;
pub mod seat_usage;
pub mod subscription_repository;
pub mod user_repository;
