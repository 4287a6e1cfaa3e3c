use crate::dns::forwarding::{DnsResponse, QueryMessage, ResponseParser};
use crate::dns::transport::Transport;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;
use xmpp_srv_check_domain::DomainError;

/// Result of a single-server query attempt
pub struct QueryAttemptResult {
    pub response: DnsResponse,
    pub server_addr: SocketAddr,
    pub latency_ms: u64,
    pub protocol_used: &'static str,
}

/// Sends `query` to one server over UDP and parses the answer.
///
/// A truncated UDP answer is retried over TCP against the same server within
/// what is left of `timeout`. A response whose id does not match the query
/// is rejected as [`DomainError::InvalidDnsResponse`].
pub async fn query_server(
    server_addr: SocketAddr,
    query: &QueryMessage,
    timeout: Duration,
) -> Result<QueryAttemptResult, DomainError> {
    let start = Instant::now();

    let udp = Transport::udp(server_addr);
    let udp_response = udp.send(&query.bytes, timeout).await?;
    let mut response = parse_matching(&udp_response.bytes, query.id)?;
    let mut protocol_used = udp_response.protocol_used;

    if response.truncated {
        debug!(server = %server_addr, "Response truncated (TC bit), retrying via TCP");

        let remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            return Err(DomainError::QueryTimeout);
        }

        let tcp = Transport::tcp(server_addr);
        let tcp_response = tcp.send(&query.bytes, remaining).await?;
        response = parse_matching(&tcp_response.bytes, query.id)?;
        protocol_used = tcp_response.protocol_used;
    }

    Ok(QueryAttemptResult {
        response,
        server_addr,
        latency_ms: start.elapsed().as_millis() as u64,
        protocol_used,
    })
}

fn parse_matching(bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
    let response = ResponseParser::parse(bytes)?;
    if response.id != expected_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response id {} does not match query id {}",
            response.id, expected_id
        )));
    }
    Ok(response)
}
