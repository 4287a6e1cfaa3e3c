#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, SRV, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// How the mock answers one (name, type) pair.
#[derive(Clone)]
pub enum MockAnswer {
    Records(Vec<Record>),
    Rcode(ResponseCode),
    /// Never replies.
    Silent,
    /// Replies over UDP with TC set and no answers; TCP gets the records.
    Truncated(Vec<Record>),
    /// Replies with the records under a different message id.
    WrongId(Vec<Record>),
}

type Zone = HashMap<(String, RecordType), MockAnswer>;

/// Builds the answer table served by a [`MockDnsServer`].
/// Unknown names get NXDOMAIN.
#[derive(Default)]
pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, name: &str, record_type: RecordType, answer: MockAnswer) -> Self {
        self.zone.insert((key(name), record_type), answer);
        self
    }

    pub fn ns(self, zone: &str, targets: &[&str]) -> Self {
        let records = targets
            .iter()
            .map(|target| record(zone, RData::NS(NS(name(target)))))
            .collect();
        self.answer(zone, RecordType::NS, MockAnswer::Records(records))
    }

    pub fn addresses(self, host: &str, addresses: &[IpAddr]) -> Self {
        let records = addresses
            .iter()
            .map(|address| match address {
                IpAddr::V4(v4) => record(host, RData::A(A(*v4))),
                IpAddr::V6(v6) => record(host, RData::AAAA(AAAA(*v6))),
            })
            .collect();
        self.answer(host, RecordType::A, MockAnswer::Records(records))
    }

    pub fn srv(self, owner: &str, entries: &[(u16, u16, u16, &str)]) -> Self {
        let records = entries
            .iter()
            .map(|(priority, weight, port, target)| {
                srv_record(owner, *priority, *weight, *port, target)
            })
            .collect();
        self.answer(owner, RecordType::SRV, MockAnswer::Records(records))
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}

pub fn name(raw: &str) -> Name {
    let mut name = Name::from_str(raw).unwrap();
    name.set_fqdn(true);
    name
}

pub fn record(owner: &str, data: RData) -> Record {
    Record::from_rdata(name(owner), 300, data)
}

pub fn srv_record(owner: &str, priority: u16, weight: u16, port: u16, target: &str) -> Record {
    record(
        owner,
        RData::SRV(SRV::new(priority, weight, port, name(target))),
    )
}

pub fn txt_record(owner: &str, text: &str) -> Record {
    record(owner, RData::TXT(TXT::new(vec![text.to_string()])))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    record(owner, RData::CNAME(CNAME(name(target))))
}

fn key(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Authoritative-looking DNS server on loopback serving a fixed zone over
/// UDP and TCP on the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds `ip:port`; port 0 picks a free one. Servers that must be
    /// reachable through one client share a port on different loopback ips.
    pub async fn start(ip: IpAddr, port: u16, zone: Zone) -> Result<Self, std::io::Error> {
        let udp = UdpSocket::bind(SocketAddr::new(ip, port)).await?;
        let addr = udp.local_addr()?;
        let tcp = TcpListener::bind(addr).await?;
        let zone = Arc::new(zone);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = udp.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = respond(&zone, &buf[..len], false) {
                                let _ = udp.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = tcp.accept() => {
                        if let Ok((stream, _)) = result {
                            tokio::spawn(serve_tcp(stream, Arc::clone(&zone)));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn ip(&self) -> IpAddr {
        self.addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn loopback(last_octet: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, last_octet))
}

async fn serve_tcp(mut stream: TcpStream, zone: Arc<Zone>) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }
    if let Some(response) = respond(&zone, &query, true) {
        let _ = stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await;
        let _ = stream.write_all(&response).await;
    }
}

fn respond(zone: &Zone, query_bytes: &[u8], over_tcp: bool) -> Option<Vec<u8>> {
    let request = Message::from_vec(query_bytes).ok()?;
    let query = request.queries().first()?.clone();
    let lookup = (key(&query.name().to_utf8()), query.query_type());

    let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
    response.set_authoritative(true);
    response.add_query(query);

    match zone.get(&lookup) {
        None => {
            response.set_response_code(ResponseCode::NXDomain);
        }
        Some(MockAnswer::Silent) => return None,
        Some(MockAnswer::Rcode(code)) => {
            response.set_response_code(*code);
        }
        Some(MockAnswer::Records(records)) => {
            for record in records {
                response.add_answer(record.clone());
            }
        }
        Some(MockAnswer::Truncated(records)) => {
            if over_tcp {
                for record in records {
                    response.add_answer(record.clone());
                }
            } else {
                response.set_truncated(true);
            }
        }
        Some(MockAnswer::WrongId(records)) => {
            let mut header = *response.header();
            header.set_id(request.id().wrapping_add(1));
            response.set_header(header);
            for record in records {
                response.add_answer(record.clone());
            }
        }
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    response.emit(&mut encoder).ok()?;
    Some(buf)
}
