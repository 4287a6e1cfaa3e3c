use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::ledger::LedgerConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "xmpp-srv-check.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/xmpp-srv-check/config.toml";

/// Main configuration structure for the XMPP SRV checker
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP API bind settings
    pub server: ServerConfig,

    /// DNS lookup settings (timeout, bootstrap servers)
    pub dns: DnsConfig,

    /// Request ledger settings
    pub ledger: LedgerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. xmpp-srv-check.toml in current directory
    /// 3. /etc/xmpp-srv-check/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.dns.query_timeout_ms = timeout;
        }
        if let Some(timeout) = overrides.server_timeout_ms {
            self.dns.server_timeout_ms = timeout;
        }
        if !overrides.bootstrap_servers.is_empty() {
            self.dns.bootstrap_servers = overrides.bootstrap_servers;
        }
        if overrides.authority_fallback {
            self.dns.authority_fallback = true;
        }
        if let Some(path) = overrides.ledger_path {
            self.ledger.path = path;
        }
        if overrides.no_ledger {
            self.ledger.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.dns.server_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Server timeout cannot be 0".to_string(),
            ));
        }

        if self.dns.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.dns.parsed_bootstrap_servers()?;

        if self.ledger.enabled && self.ledger.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Ledger is enabled but has no path".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub server_timeout_ms: Option<u64>,
    pub bootstrap_servers: Vec<String>,
    pub authority_fallback: bool,
    pub ledger_path: Option<String>,
    pub no_ledger: bool,
    pub log_level: Option<String>,
}
