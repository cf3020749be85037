//! Process bootstrap shared by the service binaries.

use std::future::Future;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(service: &'static str) {
    // load .env first so RUST_LOG / LOG_FORMAT take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service, event = "logger_init", "tracing subscriber initialized");
}

/// Build a Tokio runtime sized by `worker_threads`, run `serve` on it, and
/// stop on Ctrl+C.
pub fn launch<F, Fut>(service: &'static str, worker_threads: impl FnOnce(&configs::AppConfig) -> Option<usize>, serve: F) -> std::process::ExitCode
where
    F: FnOnce(configs::AppConfig) -> Fut,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    init_logging(service);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let threads = worker_threads(&cfg);

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service, event = "start", %service_id, pid, version, threads = threads.unwrap_or_default(), "service starting");

    let fut = serve(cfg);
    rt.block_on(async move {
        let task = tokio::spawn(fut);
        tokio::select! {
            res = task => match res {
                Ok(Ok(())) => {
                    info!(service, event = "stop", %service_id, pid, "service stopped normally");
                    std::process::ExitCode::SUCCESS
                }
                Ok(Err(e)) => {
                    error!(service, event = "run_failed", error = %e, "service returned error");
                    std::process::ExitCode::FAILURE
                }
                Err(e) => {
                    error!(service, event = "task_join_error", error = %e, "service task join error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service, event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
