//! Reset the catalog to the reference games.

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{error, info};

use common::utils::logging::{init_logging, LogFormat};
use service::games::{GameService, SeaOrmGameRepository};
use service::seed::seed_catalog;

async fn seed() -> anyhow::Result<usize> {
    let mut cfg = configs::AppConfig::load()?;
    cfg.normalize_and_validate()?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .context("connect to database")?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await.context("run migrations")?;
        info!("migrations applied");
    }

    let svc = GameService::new(Arc::new(SeaOrmGameRepository::new(db)));
    let inserted = seed_catalog(&svc).await?;
    Ok(inserted.len())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    let format = std::env::var("LOG_FORMAT").map(|v| LogFormat::parse(&v)).unwrap_or_default();
    init_logging(format);

    match seed().await {
        Ok(count) => {
            info!(service = "seed", event = "done", count, "catalog seeded");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "seed", event = "failed", error = %e, "seeding failed");
            std::process::ExitCode::FAILURE
        }
    }
}
