//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC bit set,
//! the caller retries via TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use xmpp_srv_check_domain::DomainError;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| DomainError::Io(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| {
                DomainError::Io(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(server = %self.server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) =
                socket.recv_from(&mut recv_buf).await.map_err(|e| {
                    DomainError::Io(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source, ignoring"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)??;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes.len(),
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes,
            protocol_used: self.protocol_name(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
