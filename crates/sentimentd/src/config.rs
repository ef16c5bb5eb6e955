//! Configuration for sentimentd.
//!
//! Only the listener is configurable, via environment variables; the
//! API surface itself has no knobs. Log verbosity comes from RUST_LOG.

use std::env;
use tracing::warn;

pub const HOST_ENV: &str = "SENTIMENTD_HOST";
pub const PORT_ENV: &str = "SENTIMENTD_PORT";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var(HOST_ENV).unwrap_or_else(|_| default_host());
        let port = match env::var(PORT_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid {} value '{}', using default", PORT_ENV, raw);
                default_port()
            }),
            Err(_) => default_port(),
        };
        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
