//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: la policy
//! de capacidad de licencias y el seed de datos de demo.

pub mod seat_policy;
pub mod seed_service;
