//! Хранилище серверов и аккаунтов: трейт и реализация поверх sea-orm.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use kedai_entities::servers::{self, Entity as ServerEntity};
use kedai_entities::ssh_accounts::{self, STATUS_ACTIVE};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryOrder,
};
use uuid::Uuid;

/// Данные для вставки нового аккаунта.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub server_id: String,
    pub username: String,
    pub password: String,
    /// ISO-8601
    pub created_at: String,
    /// ISO-8601, created_at + срок жизни аккаунта
    pub expired_at: String,
}

/// Операции с хранилищем, от которых зависит витрина.
/// Позволяет подменить БД в тестах.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Все серверы, отсортированные по имени.
    async fn list_servers(&self) -> Result<Vec<servers::Model>, AppError>;

    /// Сервер по id, `None` если не найден.
    async fn get_server(&self, id: &str) -> Result<Option<servers::Model>, AppError>;

    /// Вставить одну запись аккаунта и вернуть созданную строку.
    async fn insert_account(&self, account: NewAccount) -> Result<ssh_accounts::Model, AppError>;

    /// Доступно ли хранилище.
    async fn ping(&self) -> bool;
}

/// Хранилище поверх подключения sea-orm.
#[derive(Clone)]
pub struct DbStore {
    db: DatabaseConnection,
}

impl DbStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl AccountStore for DbStore {
    async fn list_servers(&self) -> Result<Vec<servers::Model>, AppError> {
        let servers = ServerEntity::find()
            .order_by_asc(servers::Column::Name)
            .all(&self.db)
            .await?;
        Ok(servers)
    }

    async fn get_server(&self, id: &str) -> Result<Option<servers::Model>, AppError> {
        let server = ServerEntity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(server)
    }

    async fn insert_account(&self, account: NewAccount) -> Result<ssh_accounts::Model, AppError> {
        let model = ssh_accounts::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            server_id: Set(account.server_id),
            username: Set(account.username),
            password: Set(account.password),
            status: Set(STATUS_ACTIVE.to_string()),
            created_at: Set(account.created_at),
            expired_at: Set(account.expired_at),
            updated_at: Set(None),
        };
        let created = model.insert(&self.db).await?;
        Ok(created)
    }

    async fn ping(&self) -> bool {
        self.db.execute_unprepared("SELECT 1").await.is_ok()
    }
}

/// Демо-серверы для локального запуска.
struct DemoServer {
    name: &'static str,
    hostname: &'static str,
    location: &'static str,
}

const DEMO_SERVERS: [DemoServer; 2] = [
    DemoServer {
        name: "SG-1",
        hostname: "sg1.kedaissh.local",
        location: "singapore",
    },
    DemoServer {
        name: "ID-1",
        hostname: "id1.kedaissh.local",
        location: "indonesia",
    },
];

/// Заполнить таблицу servers демо-записями, если она пуста.
/// Возвращает число вставленных серверов.
pub async fn seed_demo_servers(db: &DatabaseConnection) -> Result<usize, AppError> {
    if ServerEntity::find().count(db).await? > 0 {
        return Ok(0);
    }

    let now = Utc::now().to_rfc3339();
    for demo in &DEMO_SERVERS {
        let model = servers::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(demo.name.to_string()),
            hostname: Set(demo.hostname.to_string()),
            location: Set(demo.location.to_string()),
            status: Set(servers::STATUS_ONLINE.to_string()),
            load: Set(0),
            max_users: Set(50),
            port: Set(22),
            created_at: Set(Some(now.clone())),
            updated_at: Set(None),
        };
        model.insert(db).await?;
    }

    tracing::info!("Добавлено демо-серверов: {}", DEMO_SERVERS.len());
    Ok(DEMO_SERVERS.len())
}
