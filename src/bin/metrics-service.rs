// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::sync::Arc;
use std::time::Duration;

use devops_toolchain::{
    AppState, Config, MetricsRegistry, Result, create_router, server, start_gauge_updater,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    server::setup_tracing();

    // PORT переопределяет порт по умолчанию (3001)
    let config = Config::metrics_from_env();

    // Создаём реестр метрик
    let metrics = MetricsRegistry::new();

    let listener = server::bind(&config).await?;
    let port = config
        .port()
        .unwrap_or(devops_toolchain::defaults::METRICS_PORT);

    let state = Arc::new(AppState { config, metrics });

    let shutdown_rx = server::shutdown_channel();

    // Запускаем периодическое обновление gauge в фоне
    start_gauge_updater(
        shutdown_rx.clone(),
        state.metrics.clone(),
        Duration::from_secs(state.config.update_interval_secs),
    );

    let app = create_router(state);

    tracing::info!("App listening at http://localhost:{}", port);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /        - Greeting");
    tracing::info!("  - GET /metrics - Prometheus metrics");

    server::serve(listener, app, shutdown_rx).await
}
