//! Ядро витрины SSH-аккаунтов Kedai SSH.

pub mod api;
pub mod config;
pub mod error;
pub mod services;


use api::AppState;
use config::ServerConfig;
use kedai_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use services::store::{seed_demo_servers, DbStore};
use tokio::sync::watch;
use tracing::info;

/// Запустить сервер витрины.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.listen_addr()?;

    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.redacted_db_url());
    let db: DatabaseConnection = Database::connect(&config.db_url).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    let store = DbStore::new(db);
    if config.seed_demo {
        seed_demo_servers(store.connection()).await?;
    }

    // 3. Маршрутизатор
    let app = api::build_router(AppState::new(store));

    // 4. Graceful shutdown
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 5. Запуск сервера
    info!("Запуск HTTP сервера на {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow_and_update() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;

    info!("Сервер витрины остановлен");
    Ok(())
}
