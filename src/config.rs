//! Client and host configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `UiConfig` is provided as Leptos context by `App` so widgets read the API
//! base, sign-in route, and toast lifetime from one place. `ServerConfig` is
//! only consumed by the SSR host binary.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_SIGN_IN_PATH: &str = "/sign-in";
pub const DEFAULT_TOAST_TTL_MS: u32 = 4_000;

/// Settings shared by the widgets at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub api_base: String,
    pub sign_in_path: String,
    pub toast_ttl_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_owned(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

/// Listen address for the SSR host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub site_addr: SocketAddr,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: overrides the port of `default_addr` (the Leptos site address)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` when `PORT` is set but not a valid port.
    pub fn from_env(default_addr: SocketAddr) -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref(), default_addr.port())?;
        Ok(Self { site_addr: SocketAddr::new(default_addr.ip(), port) })
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
