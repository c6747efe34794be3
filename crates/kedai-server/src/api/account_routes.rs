//! Маршрут создания SSH-аккаунта.

use crate::api::AppState;
use crate::error::AppError;
use crate::services::account_service::{self, CreatedAccount};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Данные для подключения к новому аккаунту.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub id: String,
    pub username: String,
    pub password: String,
    pub server_name: String,
    pub hostname: String,
    pub port: i32,
    pub expired_at: String,
}

impl From<CreatedAccount> for CreateAccountResponse {
    fn from(a: CreatedAccount) -> Self {
        CreateAccountResponse {
            id: a.id,
            username: a.username,
            password: a.password,
            server_name: a.server_name,
            hostname: a.server_hostname,
            port: a.server_port,
            expired_at: a.expired_at,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/servers/{server_id}/accounts", post(create_account))
}

/// POST /api/v1/servers/{server_id}/accounts — создать аккаунт на 30 дней.
async fn create_account(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAccountResponse>), AppError> {
    let Json(req) = payload?;
    let created = account_service::create_account(
        state.store.as_ref(),
        &server_id,
        &req.username,
        &req.password,
        Utc::now(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
