//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use xmpp_srv_check_domain::{DomainError, RecordType};

/// A serialized query and the id needed to match its response.
#[derive(Debug, Clone)]
pub struct QueryMessage {
    pub id: u16,
    pub bytes: Vec<u8>,
}

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `domain` with a random id.
    ///
    /// The name is made fully qualified so no search domain is ever applied.
    /// A name the codec rejects maps to [`DomainError::InvalidHostname`].
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<QueryMessage, DomainError> {
        Self::build_query_with_id(fastrand::u16(..), domain, record_type)
    }

    pub fn build_query_with_id(
        id: u16,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<QueryMessage, DomainError> {
        let name = Self::parse_name(domain)?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok(QueryMessage { id, bytes })
    }

    pub fn parse_name(domain: &str) -> Result<Name, DomainError> {
        let mut name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidHostname(format!("Invalid domain '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);
        Ok(name)
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidHostname(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
