//! Создание SSH-аккаунта: валидация, проверка сервера, вставка записи.

use crate::error::AppError;
use crate::services::store::{AccountStore, NewAccount};
use crate::services::validation::validate_account;
use chrono::{DateTime, SecondsFormat, Utc};

/// Срок жизни аккаунта в днях.
pub const ACCOUNT_TTL_DAYS: i64 = 30;

/// Данные созданного аккаунта для показа клиенту.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAccount {
    pub id: String,
    pub username: String,
    pub password: String,
    pub server_name: String,
    pub server_hostname: String,
    pub server_port: i32,
    pub expired_at: String,
}

/// Время истечения аккаунта, созданного в момент `now` (ISO-8601, UTC, миллисекунды).
pub fn expiry_timestamp(now: DateTime<Utc>) -> String {
    (now + chrono::Duration::days(ACCOUNT_TTL_DAYS)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Создать аккаунт на сервере `server_id`.
///
/// Невалидные данные отклоняются до любого обращения к хранилищу.
/// Повторов нет: ошибка вставки возвращается как есть.
pub async fn create_account(
    store: &dyn AccountStore,
    server_id: &str,
    username: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<CreatedAccount, AppError> {
    let input = validate_account(username, password)?;

    let server = store
        .get_server(server_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Сервер не найден: {server_id}")))?;

    if !server.is_online() {
        return Err(AppError::Conflict(format!(
            "Сервер {} сейчас недоступен",
            server.name
        )));
    }

    let created = store
        .insert_account(NewAccount {
            server_id: server.id.clone(),
            username: input.username,
            password: input.password,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            expired_at: expiry_timestamp(now),
        })
        .await?;

    tracing::info!(
        "Создан SSH-аккаунт {} на сервере {} (до {})",
        created.username,
        server.name,
        created.expired_at
    );

    Ok(CreatedAccount {
        id: created.id,
        username: created.username,
        password: created.password,
        server_name: server.name,
        server_hostname: server.hostname,
        server_port: server.port,
        expired_at: created.expired_at,
    })
}
