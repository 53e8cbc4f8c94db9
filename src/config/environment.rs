//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: Option<String>,
    // API legada
    pub legacy_api_url: String,
    pub legacy_read_timeout: Duration,
    pub legacy_write_timeout: Duration,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = var("PORT").ok_or(ConfigError::Missing("PORT"))?;
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value: port })?;

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            port,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: var("LOG_LEVEL"),
            legacy_api_url: var("LEGACY_API_URL").ok_or(ConfigError::Missing("LEGACY_API_URL"))?,
            legacy_read_timeout: seconds(var("LEGACY_READ_TIMEOUT_SECS"), "LEGACY_READ_TIMEOUT_SECS", 2)?,
            legacy_write_timeout: seconds(var("LEGACY_WRITE_TIMEOUT_SECS"), "LEGACY_WRITE_TIMEOUT_SECS", 20)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de log: explícito, o `debug` en desarrollo e `info` en el resto
    pub fn max_log_level(&self) -> tracing::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(if self.is_development() {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            })
    }
}

fn seconds(value: Option<String>, name: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(Duration::from_secs(default)),
        Some(v) => v
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidNumber { name, value: v }),
    }
}
