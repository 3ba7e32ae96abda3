//! Product server entry point and composition root

mod cli;
mod config;
mod logging;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use product_service::infra::storage::{connect_admin, Session};
use product_service::ProductServiceModule;
use tower_http::trace::TraceLayer;

use crate::cli::Cli;
use crate::config::AppConfig;

/// Diagnostic name of the long-lived data session
const DATA_SESSION: &str = "product-data";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config_dir, cli.profile.as_deref())
        .with_context(|| format!("failed to load configuration from {}", cli.config_dir.display()))?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;
    tracing::info!(profile = ?cli.profile, "Starting product server");

    run(config).await
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let keyspace = config.product_service.keyspace.clone();

    // Schema must exist before the data session binds to it.
    let admin = connect_admin(&config.database)
        .await
        .context("failed to open admin connection")?;
    ProductServiceModule::migrate(&admin, &config.product_service)
        .await
        .context("schema provisioning failed")?;
    if let Err(e) = admin.close().await {
        tracing::warn!(error = %e, "failed to close admin connection");
    }

    let session = Session::connect(DATA_SESSION, &config.database, &keyspace)
        .await
        .context("failed to open data session")?;
    let module = ProductServiceModule::init(&session, config.product_service.clone())
        .context("failed to initialize product service")?;

    let router = module
        .register_rest(Router::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, %keyspace, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    session.close().await.context("failed to close data session")?;
    tracing::info!("Product server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
