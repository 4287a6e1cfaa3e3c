pub mod dns;
pub mod errors;
pub mod ledger;
pub mod logging;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use ledger::LedgerConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
