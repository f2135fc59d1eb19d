//! Backend de gestión HR multi-tenant con licenciamiento por puestos.
//!
//! Las companies contratan un plan con una cantidad de seats; la policy de
//! capacidad decide en cada escritura si queda un puesto libre.

pub mod config;
pub mod controllers;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
