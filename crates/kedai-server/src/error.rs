//! Типы ошибок витрины.

use crate::services::validation::FieldErrors;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Сообщение, которое видит клиент при любом сбое хранилища.
pub const PERSISTENCE_MESSAGE: &str = "Не удалось выполнить операцию. Попробуйте ещё раз.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Ошибка валидации: {0}")]
    Validation(FieldErrors),

    #[error("Не найдено: {0}")]
    NotFound(String),

    #[error("Конфликт: {0}")]
    Conflict(String),

    #[error("Неверный запрос: {0}")]
    BadRequest(String),

    /// Сбой хранилища: сеть, ограничение, ошибка сервера БД. Не различаются.
    #[error("Ошибка хранилища: {0}")]
    Persistence(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(json!({
                    "error": "Проверьте введённые данные",
                    "fields": fields,
                })),
            )
                .into_response(),
            AppError::NotFound(m) => error_body(StatusCode::NOT_FOUND, m),
            AppError::Conflict(m) => error_body(StatusCode::CONFLICT, m),
            AppError::BadRequest(m) => error_body(StatusCode::BAD_REQUEST, m),
            AppError::Persistence(detail) => {
                tracing::error!("Ошибка хранилища: {detail}");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PERSISTENCE_MESSAGE.to_string(),
                )
            }
        }
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::Persistence(e.to_string())
    }
}

impl From<FieldErrors> for AppError {
    fn from(e: FieldErrors) -> Self {
        AppError::Validation(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}
