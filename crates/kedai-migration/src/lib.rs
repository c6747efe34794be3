//! Миграции схемы витрины: servers и ssh_accounts.

pub use sea_orm_migration::prelude::*;

mod m001_create_servers;
mod m002_create_ssh_accounts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m001_create_servers::Migration),
            Box::new(m002_create_ssh_accounts::Migration),
        ]
    }
}
