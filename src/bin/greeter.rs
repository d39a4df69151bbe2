// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use devops_toolchain::{Config, Result, greeter_router, server};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Инициализация логирования
    server::setup_tracing();

    let config = Config::greeter();

    // Канал завершения (graceful shutdown)
    let shutdown_rx = server::shutdown_channel();

    let app = greeter_router();
    let listener = server::bind(&config).await?;

    tracing::info!(
        "App listening at http://localhost:{}",
        config.port().unwrap_or(devops_toolchain::defaults::GREETER_PORT)
    );
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /        - Greeting");

    server::serve(listener, app, shutdown_rx).await
}
