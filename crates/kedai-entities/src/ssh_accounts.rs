//! Entity для таблицы ssh_accounts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Статус только что созданного аккаунта.
pub const STATUS_ACTIVE: &str = "active";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ssh_accounts")]
pub struct Model {
    /// UUID, генерируется при вставке
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Ссылка на servers.id
    pub server_id: String,

    pub username: String,

    pub password: String,

    /// По умолчанию "active"
    pub status: String,

    /// Время создания (ISO-8601)
    pub created_at: String,

    /// Время истечения: created_at + 30 дней (ISO-8601)
    pub expired_at: String,

    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::servers::Entity",
        from = "Column::ServerId",
        to = "super::servers::Column::Id",
        on_delete = "Cascade"
    )]
    Server,
}

impl Related<super::servers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
