//! XMPP SRV Check Domain Layer
pub mod config;
pub mod errors;
pub mod hostname;
pub mod notes;
pub mod record_type;
pub mod report;
pub mod srv;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LedgerConfig, LoggingConfig};
pub use errors::DomainError;
pub use hostname::Hostname;
pub use notes::{DisplayRecord, FootnoteIndex, NoteKind, RecordNote};
pub use record_type::RecordType;
pub use report::{CategoryReport, Footnote, XmppDnsReport};
pub use srv::{AnswerSet, ServiceClass, SrvAnswers, SrvRecord, SrvService, TlsMode};
