//! Entity для таблицы servers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Статус сервера, при котором на нём можно создавать аккаунты.
pub const STATUS_ONLINE: &str = "online";

/// Статус недоступного сервера.
pub const STATUS_OFFLINE: &str = "offline";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servers")]
pub struct Model {
    /// UUID первичного ключа
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Отображаемое имя сервера
    pub name: String,

    /// Хост для SSH-подключения
    pub hostname: String,

    /// Ключ локации в таблице цен (например "singapore")
    pub location: String,

    /// online / offline
    pub status: String,

    /// Загрузка в процентах (0-100)
    pub load: i32,

    pub max_users: i32,

    /// SSH-порт
    pub port: i32,

    /// Время создания (ISO-8601)
    pub created_at: Option<String>,

    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ssh_accounts::Entity")]
    SshAccounts,
}

impl Related<super::ssh_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SshAccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Доступен ли сервер для покупки.
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_ONLINE)
    }
}
