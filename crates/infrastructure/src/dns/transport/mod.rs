pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use xmpp_srv_check_domain::DomainError;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Sends one wire-format query and returns the raw response.
///
/// Exceeding `timeout` yields [`DomainError::QueryTimeout`]; socket failures
/// yield [`DomainError::Io`].
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::Udp(udp::UdpTransport::new(server_addr))
    }

    pub fn tcp(server_addr: SocketAddr) -> Self {
        Self::Tcp(tcp::TcpTransport::new(server_addr))
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}
