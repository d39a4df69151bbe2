// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the DevOps Toolchain services
//!
//! Both services listen on fixed default ports. Only the metrics service
//! honours the `PORT` environment variable.


/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const GREETER_PORT: u16 = 3000;
    pub const METRICS_PORT: u16 = 3001;
    pub const UPDATE_INTERVAL_SECS: u64 = 10;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub update_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::greeter()
    }
}

impl Config {
    /// Configuration of the greeter service
    #[must_use]
    pub fn greeter() -> Self {
        Config {
            server_addr: format!("{}:{}", defaults::HOST, defaults::GREETER_PORT),
            update_interval_secs: defaults::UPDATE_INTERVAL_SECS,
        }
    }

    /// Loads the metrics service configuration from environment variables
    ///
    /// `.env` is loaded by the binary before this is called.
    pub fn metrics_from_env() -> Self {
        let port = resolve_port(std::env::var(env_vars::PORT).ok(), defaults::METRICS_PORT);

        Config {
            server_addr: format!("{}:{}", defaults::HOST, port),
            update_interval_secs: defaults::UPDATE_INTERVAL_SECS,
        }
    }

    /// Port part of `server_addr`, used for the startup banner
    pub fn port(&self) -> Option<u16> {
        self.server_addr
            .rsplit_once(':')
            .and_then(|(_, port)| port.parse().ok())
    }
}

/// Picks the listen port from a raw `PORT` value
///
/// Unset, empty or unparsable values (including `0`) fall back to `default`.
pub fn resolve_port(raw: Option<String>, default: u16) -> u16 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            tracing::warn!(
                "Invalid {} value '{}'. Using default port {}.",
                env_vars::PORT,
                raw,
                default
            );
            default
        }
    }
}
