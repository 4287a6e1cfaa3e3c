use hickory_proto::rr::RecordType as HickoryRecordType;
use xmpp_srv_check_domain::RecordType;

/// Maps the domain record types onto hickory's.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::SRV => HickoryRecordType::SRV,
        }
    }
}
