// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Periodic gauge updater
//!
//! Overwrites `random_metric` with a fresh uniform draw in `[0, 100)` once per
//! interval for the lifetime of the process.

use rand::Rng;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::metrics::MetricsRegistry;

/// Upper bound (exclusive) of the random gauge value
pub const MAX_VALUE: f64 = 100.0;

/// Draws one gauge value uniformly from `[0, MAX_VALUE)`
pub fn sample_value() -> f64 {
    rand::thread_rng().gen_range(0.0..MAX_VALUE)
}

/// Starts the background gauge update loop
///
/// The first update happens one full `period` after start; until then the
/// gauge keeps its initial value. The loop exits once `true` is published on
/// the shutdown channel or the sender is dropped.
pub fn start_gauge_updater(
    mut shutdown_rx: watch::Receiver<bool>,
    metrics: MetricsRegistry,
    period: Duration,
) -> JoinHandle<()> {
    tracing::info!(
        "Starting background gauge updater every {}s",
        period.as_secs_f64()
    );

    let first_tick = Instant::now() + period;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = ticker.tick() => {},
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        tracing::info!("Stopping gauge updater");
                        break;
                    }
                    continue;
                }
            }

            let value = sample_value();
            metrics.set_random_metric(value);
            tracing::debug!("Updated random_metric to {:.3}", value);
        }
    })
}
