//! Service configuration read from the environment.
//!
//! Recognised variables:
//! - `CALC_HOST`: bind address (default `0.0.0.0`)
//! - `CALC_PORT`: bind port (default `8000`)
//! - `SERVICE_VERSION`: version reported by `/` and `/health` (default: crate version)
//! - `LOG_FILE_PATH`: JSON log file (default `logs/calc_service.log`)

use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/calc_service.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub service_version: String,
    pub log_file_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults
    /// for absent keys.
    ///
    /// # Errors
    ///
    /// Returns an error if `CALC_PORT` is set but is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("CALC_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("CALC_PORT must be a port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("CALC_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            service_version: lookup("SERVICE_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            log_file_path: lookup("LOG_FILE_PATH")
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string()),
        })
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_file_path: DEFAULT_LOG_FILE_PATH.to_string(),
        }
    }
}
