//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: environment.to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: vec![],
        }
    }

    #[test]
    fn test_environment_flags() {
        assert!(config("development").is_development());
        assert!(!config("development").is_production());
        assert!(config("production").is_production());
    }

    #[test]
    fn test_server_url() {
        assert_eq!(config("development").server_url(), "0.0.0.0:3000");
    }
}
