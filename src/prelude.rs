// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use devops_toolchain::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP
pub use crate::api::{AppState, create_router, greeter_router};

// Metrics types
pub use crate::metrics::MetricsRegistry;
pub use crate::updater::start_gauge_updater;
