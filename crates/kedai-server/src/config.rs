//! Конфигурация сервера витрины.

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:3000")
    pub listen: String,

    /// URL подключения к БД (sqlite или postgres)
    pub db_url: String,

    /// Заполнить пустую таблицу servers демо-серверами
    pub seed_demo: bool,
}

impl ServerConfig {
    /// Проверить, что адрес прослушивания разбирается.
    pub fn listen_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| anyhow::anyhow!("Некорректный адрес {}: {e}", self.listen))
    }

    /// URL БД для логов: пароль заменён на `***`.
    pub fn redacted_db_url(&self) -> String {
        match url::Url::parse(&self.db_url) {
            Ok(mut parsed) => {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            }
            Err(_) => "<некорректный URL>".to_string(),
        }
    }
}
