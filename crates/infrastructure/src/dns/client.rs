use super::failover::FailoverStrategy;
use super::forwarding::{DnsResponse, MessageBuilder};
use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;
use xmpp_srv_check_application::ports::NameResolutionClient;
use xmpp_srv_check_domain::{DomainError, RecordType, SrvRecord};

/// Resolution client that talks to the given servers directly over
/// UDP (with TCP fallback) using hickory-proto for the wire format.
pub struct HickoryNameResolutionClient {
    bootstrap_servers: Vec<IpAddr>,
    strategy: FailoverStrategy,
}

impl HickoryNameResolutionClient {
    pub fn new(bootstrap_servers: Vec<IpAddr>, port: u16, query_timeout: Duration) -> Self {
        Self {
            bootstrap_servers,
            strategy: FailoverStrategy::new(port, query_timeout),
        }
    }

    /// Caps the time spent on any one server of a query's server set.
    pub fn with_server_timeout(mut self, server_timeout: Duration) -> Self {
        self.strategy = self.strategy.with_server_timeout(server_timeout);
        self
    }

    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        servers: &[IpAddr],
    ) -> Result<DnsResponse, DomainError> {
        let query = MessageBuilder::build_query(name, &record_type)?;
        let result = self.strategy.query(servers, &query).await?;

        debug!(
            name = %name,
            record_type = %record_type,
            server = %result.server_addr,
            latency_ms = result.latency_ms,
            "Query answered"
        );

        Ok(result.response)
    }
}

#[async_trait]
impl NameResolutionClient for HickoryNameResolutionClient {
    fn bootstrap_servers(&self) -> Vec<IpAddr> {
        self.bootstrap_servers.clone()
    }

    async fn lookup_ns(&self, domain: &str, servers: &[IpAddr]) -> Result<Vec<String>, DomainError> {
        let response = self.query(domain, RecordType::NS, servers).await?;
        if response.name_servers.is_empty() {
            return Err(DomainError::NoAnswer);
        }
        Ok(response.name_servers)
    }

    async fn lookup_addresses(
        &self,
        host: &str,
        servers: &[IpAddr],
    ) -> Result<Vec<IpAddr>, DomainError> {
        let response = self.query(host, RecordType::A, servers).await?;
        if response.addresses.is_empty() {
            return Err(DomainError::NoAnswer);
        }
        Ok(response.addresses)
    }

    async fn lookup_srv(
        &self,
        name: &str,
        servers: &[IpAddr],
    ) -> Result<Vec<SrvRecord>, DomainError> {
        let response = self.query(name, RecordType::SRV, servers).await?;

        let unexpected = response
            .other_types
            .first()
            .map(|record_type| record_type.to_string())
            .or_else(|| (!response.addresses.is_empty()).then(|| "A/AAAA".to_string()))
            .or_else(|| (!response.name_servers.is_empty()).then(|| RecordType::NS.to_string()));
        if let Some(record_type) = unexpected {
            return Err(DomainError::UnexpectedRecord {
                query: name.to_string(),
                record_type,
            });
        }
        if response.srv_records.is_empty() {
            return Err(DomainError::NoAnswer);
        }
        Ok(response.srv_records)
    }
}
