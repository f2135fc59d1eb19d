//! Middleware del sistema
//!
//! Este módulo contiene el middleware HTTP de la aplicación.

pub mod cors;

pub use cors::*;
