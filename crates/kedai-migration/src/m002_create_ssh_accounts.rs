//! Миграция: создание таблицы ssh_accounts.

use crate::m001_create_servers::Servers;
use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m002_create_ssh_accounts"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SshAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SshAccounts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SshAccounts::ServerId).string().not_null())
                    .col(ColumnDef::new(SshAccounts::Username).string().not_null())
                    .col(ColumnDef::new(SshAccounts::Password).string().not_null())
                    .col(
                        ColumnDef::new(SshAccounts::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(SshAccounts::CreatedAt).string().not_null())
                    .col(ColumnDef::new(SshAccounts::ExpiredAt).string().not_null())
                    .col(ColumnDef::new(SshAccounts::UpdatedAt).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ssh_accounts_server_id")
                            .from(SshAccounts::Table, SshAccounts::ServerId)
                            .to(Servers::Table, Servers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Индекс по server_id для выборки аккаунтов сервера
        manager
            .create_index(
                Index::create()
                    .table(SshAccounts::Table)
                    .col(SshAccounts::ServerId)
                    .name("idx_ssh_accounts_server_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SshAccounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SshAccounts {
    Table,
    Id,
    ServerId,
    Username,
    Password,
    Status,
    CreatedAt,
    ExpiredAt,
    UpdatedAt,
}
