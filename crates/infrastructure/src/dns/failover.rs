use super::forwarding::{QueryMessage, ResponseParser};
use super::query::{query_server, QueryAttemptResult};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};
use xmpp_srv_check_domain::DomainError;

/// Longest a single server may take before the next one is tried.
pub const DEFAULT_SERVER_TIMEOUT: Duration = Duration::from_millis(2000);

/// Tries servers one after another until one gives a definitive answer.
///
/// All attempts share a single deadline and each attempt is capped at the
/// per-server timeout. NXDOMAIN ends the search as
/// [`DomainError::DomainNotFound`]. SERVFAIL, REFUSED, NOTIMP, FORMERR,
/// transport errors, malformed responses and slow servers move on to the
/// next server. [`DomainError::QueryTimeout`] is returned once the shared
/// deadline is spent, or when every server timed out.
pub struct FailoverStrategy {
    port: u16,
    timeout: Duration,
    server_timeout: Duration,
}

impl FailoverStrategy {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            server_timeout: DEFAULT_SERVER_TIMEOUT.min(timeout),
        }
    }

    pub fn with_server_timeout(mut self, server_timeout: Duration) -> Self {
        self.server_timeout = server_timeout.min(self.timeout);
        self
    }

    pub async fn query(
        &self,
        servers: &[IpAddr],
        query: &QueryMessage,
    ) -> Result<QueryAttemptResult, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::ServersUnreachable);
        }
        debug!(strategy = "failover", servers = servers.len(), "Trying sequentially");

        let deadline = Instant::now() + self.timeout;
        let mut timed_out = false;

        for (index, server) in servers.iter().enumerate() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(DomainError::QueryTimeout);
            }

            let server_addr = SocketAddr::new(*server, self.port);
            match query_server(server_addr, query, remaining.min(self.server_timeout)).await {
                Ok(r) if r.response.is_nxdomain() => return Err(DomainError::DomainNotFound),
                Ok(r) if r.response.is_server_error() => {
                    warn!(
                        server = %server_addr,
                        rcode = ResponseParser::rcode_to_status(r.response.rcode),
                        position = index,
                        "Failing over"
                    );
                }
                Ok(r) => {
                    debug!(
                        server = %r.server_addr,
                        latency_ms = r.latency_ms,
                        protocol = r.protocol_used,
                        position = index,
                        "Server responded"
                    );
                    return Ok(r);
                }
                Err(DomainError::QueryTimeout) if Instant::now() >= deadline => {
                    warn!(server = %server_addr, position = index, "Query deadline reached");
                    return Err(DomainError::QueryTimeout);
                }
                Err(DomainError::QueryTimeout) => {
                    warn!(server = %server_addr, position = index, "Server timed out, failing over");
                    timed_out = true;
                }
                Err(e) => {
                    warn!(server = %server_addr, error = %e, position = index, "Failing over");
                }
            }
        }

        if timed_out {
            Err(DomainError::QueryTimeout)
        } else {
            Err(DomainError::ServersUnreachable)
        }
    }
}
