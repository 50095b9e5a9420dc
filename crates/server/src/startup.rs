use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::games::{GameService, SeaOrmGameRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the pool, optionally migrate, and wire the catalog service.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!("migrations applied");
    } else if let Err(e) = models::db::ping(&db).await {
        warn!(error = %e, "database ping failed; requests will fail until it recovers");
    }

    let games = GameService::new(Arc::new(SeaOrmGameRepository::new(db)));
    Ok(ServerState::new(games, cfg.telemetry.metrics_enabled))
}

/// Public entry: load configuration, then run the HTTP server
pub async fn run() -> Result<(), StartupError> {
    let cfg = AppConfig::load()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(mut cfg: AppConfig) -> Result<(), StartupError> {
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let addr = cfg
        .server
        .bind_addr()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    if let Some(endpoint) = cfg.telemetry.otlp_endpoint.as_deref() {
        warn!(%endpoint, "OTLP export is not supported; metrics stay on /metrics");
    }

    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!(%addr, metrics = cfg.telemetry.metrics_enabled, "game catalog listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
