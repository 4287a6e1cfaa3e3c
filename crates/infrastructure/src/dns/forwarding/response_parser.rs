use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, RecordType as HickoryRecordType};
use std::net::IpAddr;
use tracing::debug;
use xmpp_srv_check_domain::{DomainError, SrvRecord};

/// Answer section of a response, split by the record types the checker uses.
///
/// CNAME answers are dropped; the lookups never follow aliases.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// A and AAAA answers, in answer order.
    pub addresses: Vec<IpAddr>,

    /// NS targets in trailing-dot form.
    pub name_servers: Vec<String>,

    pub srv_records: Vec<SrvRecord>,

    /// Types of answers that fit none of the buckets above.
    pub other_types: Vec<HickoryRecordType>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// Rcodes that say nothing about the name and justify asking another server.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail
                | ResponseCode::Refused
                | ResponseCode::NotImp
                | ResponseCode::FormErr
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let id = message.id();
        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut addresses = Vec::new();
        let mut name_servers = Vec::new();
        let mut srv_records = Vec::new();
        let mut other_types = Vec::new();

        for record in message.answers() {
            match record.data() {
                RData::A(a) => {
                    addresses.push(IpAddr::V4(a.0));
                }
                RData::AAAA(aaaa) => {
                    addresses.push(IpAddr::V6(aaaa.0));
                }
                RData::NS(ns) => {
                    name_servers.push(ns.to_utf8());
                }
                RData::SRV(srv) => {
                    srv_records.push(SrvRecord::new(
                        srv.priority(),
                        srv.weight(),
                        srv.port(),
                        srv.target().to_utf8(),
                    ));
                }
                RData::CNAME(canonical) => {
                    debug!(cname = %canonical.to_utf8(), "CNAME record ignored");
                }
                _ => {
                    other_types.push(record.record_type());
                }
            }
        }

        debug!(
            id = id,
            rcode = ?rcode,
            addresses = addresses.len(),
            name_servers = name_servers.len(),
            srv = srv_records.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            rcode,
            truncated,
            addresses,
            name_servers,
            srv_records,
            other_types,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::forwarding::MessageBuilder;
    use hickory_proto::op::{MessageType, OpCode, Query};
    use hickory_proto::rr::rdata::{A, CNAME, NS, SRV, TXT};
    use hickory_proto::rr::{Name, Record};
    use std::str::FromStr;

    fn response(answers: Vec<Record>) -> Vec<u8> {
        let mut message = Message::new(7, MessageType::Response, OpCode::Query);
        message.add_query(Query::query(
            Name::from_str("example.com.").unwrap(),
            HickoryRecordType::SRV,
        ));
        for answer in answers {
            message.add_answer(answer);
        }
        MessageBuilder::serialize_message(&message).unwrap()
    }

    fn name(raw: &str) -> Name {
        Name::from_str(raw).unwrap()
    }

    #[test]
    fn test_parse_mixed_answers() {
        let bytes = response(vec![
            Record::from_rdata(
                name("_xmpp-client._tcp.example.com."),
                300,
                RData::SRV(SRV::new(5, 10, 5222, name("xmpp.example.com."))),
            ),
            Record::from_rdata(
                name("example.com."),
                300,
                RData::NS(NS(name("ns1.example.net."))),
            ),
            Record::from_rdata(
                name("ns1.example.net."),
                300,
                RData::A(A::new(192, 0, 2, 1)),
            ),
        ]);

        let parsed = ResponseParser::parse(&bytes).unwrap();

        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.rcode, ResponseCode::NoError);
        assert_eq!(
            parsed.srv_records,
            vec![SrvRecord::new(5, 10, 5222, "xmpp.example.com.")]
        );
        assert_eq!(parsed.name_servers, vec!["ns1.example.net."]);
        assert_eq!(parsed.addresses, vec!["192.0.2.1".parse::<IpAddr>().unwrap()]);
        assert!(parsed.other_types.is_empty());
    }

    #[test]
    fn test_unknown_answer_type_recorded() {
        let bytes = response(vec![Record::from_rdata(
            name("example.com."),
            300,
            RData::TXT(TXT::new(vec!["v=xmpp".to_string()])),
        )]);

        let parsed = ResponseParser::parse(&bytes).unwrap();

        assert_eq!(parsed.other_types, vec![HickoryRecordType::TXT]);
    }

    #[test]
    fn test_cname_answer_dropped() {
        let bytes = response(vec![Record::from_rdata(
            name("_xmpp-client._tcp.example.com."),
            300,
            RData::CNAME(CNAME(name("alias.example.net."))),
        )]);

        let parsed = ResponseParser::parse(&bytes).unwrap();

        assert!(parsed.other_types.is_empty());
        assert!(parsed.srv_records.is_empty());
        assert!(parsed.addresses.is_empty());
    }

    #[test]
    fn test_garbage_is_invalid_response() {
        let result = ResponseParser::parse(&[0x00, 0x01, 0x02]);
        assert!(matches!(result, Err(DomainError::InvalidDnsResponse(_))));
    }

    #[test]
    fn test_server_error_rcodes() {
        for (rcode, expected) in [
            (ResponseCode::ServFail, true),
            (ResponseCode::Refused, true),
            (ResponseCode::FormErr, true),
            (ResponseCode::NXDomain, false),
            (ResponseCode::NoError, false),
        ] {
            let mut message = Message::new(1, MessageType::Response, OpCode::Query);
            message.set_response_code(rcode);
            let bytes = MessageBuilder::serialize_message(&message).unwrap();

            let parsed = ResponseParser::parse(&bytes).unwrap();
            assert_eq!(parsed.is_server_error(), expected, "{:?}", rcode);
        }
    }
}
