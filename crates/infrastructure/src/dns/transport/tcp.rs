//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Every message is framed with a two-byte big-endian length prefix. Used
//! when a UDP answer comes back truncated.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;
use xmpp_srv_check_domain::DomainError;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut stream = TcpStream::connect(self.server_addr).await.map_err(|e| {
            DomainError::Io(format!(
                "Connection refused by TCP server {}: {}",
                self.server_addr, e
            ))
        })?;

        stream.set_nodelay(true).map_err(|e| {
            DomainError::Io(format!(
                "Failed to set TCP_NODELAY on {}: {}",
                self.server_addr, e
            ))
        })?;

        send_with_length_prefix(&mut stream, message_bytes).await?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        read_with_length_prefix(&mut stream).await
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
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
            response_len = bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes,
            protocol_used: self.protocol_name(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::Io(format!(
            "DNS message too large for TCP framing: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::Io(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::Io(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::Io(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| DomainError::Io(format!("Failed to read response length: {}", e)))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| DomainError::Io(format!("Failed to read response body: {}", e)))?;

    Ok(response)
}
