use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::db::connect;


/// CRUD operations tests for the game entity
pub mod crud_tests;

// Migrations run once per test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connected, migrated database; `None` when no database is configured for tests.
pub async fn test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing or SKIP_DB_TESTS set; skipping database tests");
        return Ok(None);
    }
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect().await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(Some(connect().await?))
}
