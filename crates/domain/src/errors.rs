use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Domain not found (NXDOMAIN)")]
    DomainNotFound,

    #[error("No answer for the queried record type")]
    NoAnswer,

    #[error("No name server responded meaningfully")]
    ServersUnreachable,

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Unable to determine authoritative name servers for {domain}")]
    AuthorityUndetermined { domain: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unexpected {record_type} record in answer to {query}")]
    UnexpectedRecord { query: String, record_type: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl DomainError {
    /// Closed set of per-query outcomes a lookup may legitimately end in.
    ///
    /// Everything else is a defect and must reach the caller unchanged.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidHostname(_)
                | DomainError::DomainNotFound
                | DomainError::NoAnswer
                | DomainError::ServersUnreachable
                | DomainError::QueryTimeout
        )
    }

    /// Short status label used in logs and API payloads.
    pub fn status(&self) -> &'static str {
        match self {
            DomainError::InvalidHostname(_) => "INVALID_HOSTNAME",
            DomainError::DomainNotFound => "NXDOMAIN",
            DomainError::NoAnswer => "NOANSWER",
            DomainError::ServersUnreachable => "UNREACHABLE",
            DomainError::QueryTimeout => "TIMEOUT",
            DomainError::AuthorityUndetermined { .. } => "AUTHORITY_UNDETERMINED",
            DomainError::InvalidDnsResponse(_) | DomainError::UnexpectedRecord { .. } => {
                "BAD_RESPONSE"
            }
            DomainError::Io(_) => "IO_ERROR",
        }
    }
}
