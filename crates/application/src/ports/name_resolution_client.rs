use async_trait::async_trait;
use std::net::IpAddr;
use xmpp_srv_check_domain::{DomainError, SrvRecord};

/// Issues single DNS queries against an explicit set of name servers.
///
/// Every failure a query may legitimately end in is reported as one of the
/// lookup variants of [`DomainError`] (see [`DomainError::is_lookup_failure`]);
/// anything else signals a defect and must not be absorbed by callers.
#[async_trait]
pub trait NameResolutionClient: Send + Sync {
    /// Servers used before any delegation has been followed.
    fn bootstrap_servers(&self) -> Vec<IpAddr>;

    /// NS targets for `domain`, in answer order.
    async fn lookup_ns(&self, domain: &str, servers: &[IpAddr])
        -> Result<Vec<String>, DomainError>;

    /// Addresses of `host`. Non-address records in the answer are ignored.
    async fn lookup_addresses(
        &self,
        host: &str,
        servers: &[IpAddr],
    ) -> Result<Vec<IpAddr>, DomainError>;

    /// SRV records published at `name`.
    async fn lookup_srv(&self, name: &str, servers: &[IpAddr])
        -> Result<Vec<SrvRecord>, DomainError>;
}
