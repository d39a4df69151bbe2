// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process plumbing shared by both services
//!
//! Logging setup, Ctrl+C driven shutdown channel, and the listener loop.

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::Result;

/// Installs the global tracing subscriber
///
/// Honours `RUST_LOG`, falling back to `info`.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Creates the shutdown channel and flips it on Ctrl+C
pub fn shutdown_channel() -> watch::Receiver<bool> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    shutdown_rx
}

/// Binds the configured address
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address {}: {}", addr, e);
        e
    })?;

    Ok(listener)
}

/// Serves `app` on `listener` until the shutdown channel flips
pub async fn serve(
    listener: TcpListener,
    app: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while shutdown_rx.changed().await.is_ok() {
                if *shutdown_rx.borrow() {
                    break;
                }
            }
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}
