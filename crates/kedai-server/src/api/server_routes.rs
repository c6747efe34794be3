//! Маршруты каталога серверов: список, карточка сервера, расчёт цены.

use crate::api::AppState;
use crate::error::AppError;
use crate::services::pricing::{self, Duration, Quote, ServerPrice};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use kedai_entities::servers::Model;
use serde::{Deserialize, Serialize};

// ── Типы запросов/ответов ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub id: String,
    pub name: String,
    pub hostname: String,
    pub location: String,
    pub location_name: String,
    pub status: String,
    pub online: bool,
    pub load: i32,
    pub max_users: i32,
    pub port: i32,
    pub prices: ServerPrice,
}

impl From<Model> for ServerInfo {
    fn from(s: Model) -> Self {
        let location_name = pricing::find_location(&s.location)
            .map(|l| l.name.to_string())
            .unwrap_or_else(|| s.location.clone());
        let prices = pricing::prices_for(&s.location);
        let online = s.is_online();

        ServerInfo {
            id: s.id,
            name: s.name,
            hostname: s.hostname,
            location: s.location,
            location_name,
            status: s.status,
            online,
            load: s.load,
            max_users: s.max_users,
            port: s.port,
            prices,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServerListResponse {
    pub servers: Vec<ServerInfo>,
}

/// Параметры расчёта цены: `?monthly=false&days=5`.
#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    #[serde(default = "default_monthly")]
    pub monthly: bool,
    pub days: Option<i64>,
}

fn default_monthly() -> bool {
    true
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/servers", get(list_servers))
        .route("/servers/{server_id}", get(get_server))
        .route("/servers/{server_id}/quote", get(get_quote))
}

// ── Обработчики ──────────────────────────────────────────────────────────────

/// GET /api/v1/servers — все серверы с ценами.
async fn list_servers(State(state): State<AppState>) -> Result<Json<ServerListResponse>, AppError> {
    let servers = state.store.list_servers().await?;
    Ok(Json(ServerListResponse {
        servers: servers.into_iter().map(ServerInfo::from).collect(),
    }))
}

/// GET /api/v1/servers/{server_id} — карточка сервера.
async fn get_server(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
) -> Result<Json<ServerInfo>, AppError> {
    let server = state
        .store
        .get_server(&server_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Сервер не найден: {server_id}")))?;
    Ok(Json(server.into()))
}

/// GET /api/v1/servers/{server_id}/quote — стоимость выбранного срока.
async fn get_quote(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Result<Json<Quote>, AppError> {
    let Query(params) = params?;
    let server = state
        .store
        .get_server(&server_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Сервер не найден: {server_id}")))?;

    let duration = Duration::from_request(params.monthly, params.days);
    Ok(Json(pricing::quote(&server.location, duration)))
}
