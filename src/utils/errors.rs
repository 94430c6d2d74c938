//! Sistema de manejo de errores
//!
//! Todos los endpoints devuelven errores con la misma forma JSON:
//! `{ error, message, details?, code? }`. Los errores de PostgreSQL se
//! traducen a los status que el cliente distingue (409 para duplicados,
//! 400 para violaciones de foreign key, 404 para filas inexistentes).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

/// Resultado de las operaciones de la aplicación
pub type AppResult<T> = Result<T, AppError>;

/// Cuerpo JSON de toda respuesta de error
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(e) => database_error_response(&e),
            AppError::BadRequest(msg) => {
                eprintln!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }
            AppError::NotFound(msg) => {
                eprintln!("Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }
            AppError::Conflict(msg) => {
                eprintln!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }
            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
            AppError::ExternalApi(msg) => {
                eprintln!("External API error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("EXTERNAL_API_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Traducción de errores de sqlx a respuestas HTTP. El mensaje crudo del
/// driver viaja en `details` para poder diagnosticar desde el cliente.
fn database_error_response(e: &sqlx::Error) -> (StatusCode, ErrorResponse) {
    eprintln!("Database error: {}", e);

    if matches!(e, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            ErrorResponse {
                error: "Not Found".to_string(),
                message: "Record not found".to_string(),
                details: Some(json!({ "sql_error": e.to_string() })),
                code: Some("NOT_FOUND".to_string()),
            },
        );
    }

    if let Some(db_error) = e.as_database_error() {
        // códigos SQLSTATE de PostgreSQL
        match db_error.code().as_deref() {
            Some("23505") => {
                return (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: "Unique constraint violation".to_string(),
                        details: Some(json!({ "sql_error": db_error.message() })),
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }
            Some("23503") => {
                return (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: "Foreign key constraint violation".to_string(),
                        details: Some(json!({ "sql_error": db_error.message() })),
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }
            _ => {}
        }
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse {
            error: "Internal Server Error".to_string(),
            message: "An error occurred while accessing the database".to_string(),
            details: Some(json!({ "sql_error": e.to_string() })),
            code: Some("DB_ERROR".to_string()),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("Location ID is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Route with id 9 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response = AppError::Conflict("duplicate".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_external_api_maps_to_500() {
        let response = AppError::ExternalApi("image host down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
