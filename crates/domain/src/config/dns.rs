use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Fixed per-query timeout, shared by every server tried for one query.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Longest one server may take before the next one is tried.
    #[serde(default = "default_server_timeout_ms")]
    pub server_timeout_ms: u64,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Servers the delegation walk starts from. Empty means the system
    /// resolver configuration.
    #[serde(default)]
    pub bootstrap_servers: Vec<String>,

    /// Query the bootstrap servers when authority cannot be determined
    /// instead of failing the lookup.
    #[serde(default)]
    pub authority_fallback: bool,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            server_timeout_ms: default_server_timeout_ms(),
            port: default_port(),
            bootstrap_servers: Vec::new(),
            authority_fallback: false,
        }
    }
}

impl DnsConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn server_timeout(&self) -> Duration {
        Duration::from_millis(self.server_timeout_ms)
    }

    pub fn parsed_bootstrap_servers(&self) -> Result<Vec<IpAddr>, ConfigError> {
        self.bootstrap_servers
            .iter()
            .map(|server| {
                server.trim().parse::<IpAddr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid bootstrap server '{}': {}", server, e))
                })
            })
            .collect()
    }
}

fn default_query_timeout_ms() -> u64 {
    2500
}

fn default_server_timeout_ms() -> u64 {
    2000
}

fn default_port() -> u16 {
    53
}
