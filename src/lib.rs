// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # DevOps Toolchain
//!
//! Two minimal HTTP services: a greeter answering `GET /` with a fixed body,
//! and a metrics service that additionally publishes one randomized gauge on
//! `GET /metrics` in Prometheus text format.
//!
//! ## Main modules
//! - `api`: HTTP routers and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: Prometheus registry
//! - `server`: tracing, shutdown and listener plumbing
//! - `updater`: periodic gauge updater
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod metrics;
pub mod prelude;
pub mod server;
pub mod updater;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, defaults, env_vars, resolve_port};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP routers, state and response constants
pub use api::handlers::{GREETING, OPENMETRICS_CONTENT_TYPE};
pub use api::{AppState, create_router, greeter_router};

/// Metrics registry
pub use metrics::{MetricsRegistry, RANDOM_METRIC_HELP, RANDOM_METRIC_NAME};

/// Gauge update loop
pub use updater::start_gauge_updater;
