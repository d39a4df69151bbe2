// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the DevOps Toolchain services
//!
//! # Endpoints
//! - `GET /` — fixed greeting (both services)
//! - `GET /metrics` — Prometheus metrics (metrics service only)

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::config::Config;
use crate::metrics::MetricsRegistry;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
}

/// Creates the greeter service router
pub fn greeter_router() -> Router {
    Router::new().route("/", get(handlers::root_handler))
}

/// Creates the metrics service router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router() {
        let config = Config {
            server_addr: "127.0.0.1:3001".to_string(),
            update_interval_secs: 10,
        };

        let metrics = MetricsRegistry::new();
        let app_state = Arc::new(AppState { config, metrics });

        let _router = create_router(app_state);
        // If we get here without panicking, the router was created successfully
    }

    #[test]
    fn test_app_state_creation() {
        let config = Config::greeter();
        let metrics = MetricsRegistry::new();

        let state = AppState { config, metrics };

        assert_eq!(state.config.server_addr, "0.0.0.0:3000");
        assert_eq!(state.metrics.random_metric(), 0.0);
    }
}
