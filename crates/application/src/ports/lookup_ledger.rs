use async_trait::async_trait;
use xmpp_srv_check_domain::DomainError;

/// Append-only record of every hostname a lookup was attempted for.
#[async_trait]
pub trait LookupLedger: Send + Sync {
    async fn record(&self, hostname: &str) -> Result<(), DomainError>;
}
