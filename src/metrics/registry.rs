// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry holding the `random_metric` gauge

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::sync::Mutex;

use crate::error::Result;

pub const RANDOM_METRIC_NAME: &str = "random_metric";
pub const RANDOM_METRIC_HELP: &str = "A random metric for testing";

/// Process-wide registry; clones share the same underlying gauge
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    random_metric: Gauge<f64, AtomicU64>,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let random_metric = Gauge::<f64, AtomicU64>::default();
        registry.register(
            RANDOM_METRIC_NAME,
            RANDOM_METRIC_HELP,
            random_metric.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            random_metric,
        }
    }

    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(strip_help_period(buffer))
    }

    /// Overwrites the gauge, returning the previous value
    pub fn set_random_metric(&self, value: f64) -> f64 {
        self.random_metric.set(value)
    }

    pub fn random_metric(&self) -> f64 {
        self.random_metric.get()
    }
}

/// prometheus-client terminates every HELP string with `.`; serve ours verbatim
fn strip_help_period(text: String) -> String {
    let encoded = format!("# HELP {RANDOM_METRIC_NAME} {RANDOM_METRIC_HELP}.\n");
    let exact = format!("# HELP {RANDOM_METRIC_NAME} {RANDOM_METRIC_HELP}\n");
    text.replacen(&encoded, &exact, 1)
}
