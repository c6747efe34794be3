//! Точка входа сервера витрины Kedai SSH.

use clap::Parser;
use kedai_server::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kedai-server",
    about = "Kedai SSH — витрина SSH-аккаунтов на пуле серверов"
)]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:3000", env = "KEDAI_LISTEN")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./kedai.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,

    /// Добавить демо-серверы, если таблица servers пуста
    #[arg(long, env = "KEDAI_SEED_DEMO")]
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
        seed_demo: cli.seed_demo,
    };

    kedai_server::run(config).await
}
