//! HTTP API: маршрутизация и состояние приложения.

pub mod account_routes;
pub mod server_routes;

use crate::services::store::AccountStore;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Общее состояние приложения.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: impl AccountStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Построить маршрутизатор Axum.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .merge(server_routes::routes())
        .merge(account_routes::routes());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — проверка работоспособности.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = state.store.ping().await;
    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "error" },
        "database": db_ok,
        "service": "kedai-server"
    }))
}
