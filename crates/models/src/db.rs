use std::{env, time::Duration};

use configs::{AppConfig, DatabaseConfig};
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use tracing::info;

/// `DATABASE_URL` after loading `.env`; `None` when unset.
pub static DATABASE_URL: Lazy<Option<String>> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").ok()
});

/// Pool settings from `config.toml`/env, falling back to defaults plus `DATABASE_URL`.
/// The url stays empty when neither source sets it.
pub fn database_config() -> DatabaseConfig {
    let mut cfg = AppConfig::load().map(|c| c.database).unwrap_or_default();
    if cfg.url.trim().is_empty() {
        if let Some(url) = DATABASE_URL.as_ref() {
            cfg.url = url.clone();
        }
    }
    cfg
}

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    connect_with_config(&database_config()).await
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database pool ready");
    Ok(db)
}

/// Round-trip a trivial query to confirm the pool is usable.
pub async fn ping(db: &DatabaseConnection) -> anyhow::Result<()> {
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_string());
    db.query_one(stmt).await?;
    Ok(())
}
