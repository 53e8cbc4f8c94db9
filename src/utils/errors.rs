//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores expuesta por el servicio
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::services::filters::FilterError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// La entrada del llamador es inválida
    #[error("{0}")]
    Validation(String),

    /// El recurso no existe
    #[error("{0}")]
    NotFound(String),

    /// El legado falló, no responde o devolvió algo indescifrable.
    ///
    /// El mensaje llega al cliente: debe ser fijo, sin detalles del upstream.
    #[error("{0}")]
    Internal(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),
}

impl From<FilterError> for AppError {
    fn from(e: FilterError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidPayload(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                ErrorResponse {
                    error: msg,
                    code: "VALIDATION_ERROR",
                    details: None,
                }
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                ErrorResponse {
                    error: msg,
                    code: "NOT_FOUND",
                    details: None,
                }
            }

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                ErrorResponse {
                    error: msg,
                    code: "INTERNAL_ERROR",
                    details: None,
                }
            }

            AppError::InvalidPayload(e) => {
                warn!("Invalid payload: {}", e);
                ErrorResponse {
                    error: "body is invalid".to_string(),
                    code: "VALIDATION_ERROR",
                    details: serde_json::to_value(&e).ok(),
                }
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                ErrorResponse {
                    error: msg,
                    code: "BAD_REQUEST",
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
