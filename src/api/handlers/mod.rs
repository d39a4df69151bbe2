// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod metrics;
mod root;

pub use metrics::{OPENMETRICS_CONTENT_TYPE, metrics_handler};
pub use root::{GREETING, root_handler};
