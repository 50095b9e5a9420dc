use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

use common::utils::logging::{init_logging, LogFormat};

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, LOG_FORMAT and DATABASE_URL take effect
    dotenv().ok();

    let cfg = configs::AppConfig::load();
    let log_format = match &cfg {
        Ok(c) => LogFormat::parse(&c.telemetry.log_format),
        Err(_) => std::env::var("LOG_FORMAT").map(|v| LogFormat::parse(&v)).unwrap_or_default(),
    };
    init_logging(log_format);
    info!(service = "game-catalog", event = "logger_init", ?log_format, "tracing subscriber initialized");

    let cfg = match cfg {
        Ok(c) => c,
        Err(e) => {
            error!(service = "game-catalog", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "game-catalog",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads.filter(|w| *w > 0);
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "game-catalog", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "game-catalog",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "game catalog starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(server::run_with_config(cfg));

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(service = "game-catalog", event = "stop", %service_id, pid, "server stopped normally");
                        std::process::ExitCode::SUCCESS
                    }
                    Ok(Err(e)) => {
                        error!(service = "game-catalog", event = "run_failed", error = %e, "server exited with error");
                        std::process::ExitCode::FAILURE
                    }
                    Err(e) => {
                        error!(service = "game-catalog", event = "task_join_error", error = %e, "server task join error");
                        std::process::ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // in-flight requests are dropped with the runtime
                warn!(service = "game-catalog", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
