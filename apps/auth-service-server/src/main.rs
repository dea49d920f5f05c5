//! Third-party transaction authorization server.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod logging;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use clap::Parser;
use tokio::signal;
use tokio_util::task::TaskTracker;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "auth-service-server", version, about)]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Force debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        let rendered = serde_json::to_string_pretty(&cfg)?;
        println!("{rendered}");
        return Ok(());
    }

    logging::init(&cfg.logging, cli.verbose)?;

    let service = thirdparty_authorizations::build_service(&cfg.authorizations)?;
    let tasks = TaskTracker::new();
    let router = thirdparty_authorizations::build_router(service, tasks.clone())
        .layer(RequestBodyLimitLayer::new(cfg.server.body_limit_bytes))
        .layer(DefaultBodyLimit::max(cfg.server.body_limit_bytes))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = cfg
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", cfg.server.bind_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "HTTP server bound");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    info!("HTTP server stopped");
    thirdparty_authorizations::drain_in_flight(&tasks).await;
    info!("In-flight authorizations drained");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => error!(error = %err, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}
