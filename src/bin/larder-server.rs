// ABOUTME: HTTP server binary exposing shopping-list generation and review
// ABOUTME: Loads environment configuration, opens the database, and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Larder Server Binary
//!
//! Starts the REST API over a `SQLite` database.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use larder::{
    config::environment::ServerConfig, database::Database, logging, resources::ServerResources,
    routes,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "larder-server")]
#[command(about = "Larder - shopping lists generated from meal plans")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    info!(http_port = config.http_port, "Starting Larder server");

    let database = Database::new(&config.database_url).await?;
    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));
    let router = routes::build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
