// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics registry for the metrics service

mod registry;

/// Prometheus metrics registry and its single gauge descriptor
pub use registry::{MetricsRegistry, RANDOM_METRIC_HELP, RANDOM_METRIC_NAME};
