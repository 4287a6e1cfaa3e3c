use serde::Serialize;
use std::net::IpAddr;

use crate::hostname::Hostname;
use crate::notes::{DisplayRecord, FootnoteIndex, NoteKind};
use crate::srv::ServiceClass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footnote {
    pub index: u32,
    pub kind: NoteKind,
    pub text: String,
}

/// Annotated records of one service class plus their footnotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub service_class: ServiceClass,
    pub records: Vec<DisplayRecord>,
    pub footnote_index: FootnoteIndex,
    pub footnotes: Vec<Footnote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_records_message: Option<String>,
}

impl CategoryReport {
    pub fn new(
        service_class: ServiceClass,
        hostname: &Hostname,
        records: Vec<DisplayRecord>,
        footnote_index: FootnoteIndex,
    ) -> Self {
        let footnotes = footnote_index
            .iter()
            .map(|(kind, index)| Footnote {
                index,
                kind,
                text: kind.footnote(service_class),
            })
            .collect();

        let missing_records_message = records
            .is_empty()
            .then(|| missing_records_message(service_class, hostname));

        Self {
            service_class,
            records,
            footnote_index,
            footnotes,
            missing_records_message,
        }
    }
}

fn missing_records_message(class: ServiceClass, hostname: &Hostname) -> String {
    match class {
        ServiceClass::Client => format!(
            "No xmpp-client DNS SRV records found! XMPP clients will try to login to \
             {hostname} on port 5222. If this is incorrect then logging in will fail."
        ),
        ServiceClass::Server => format!(
            "No xmpp-server DNS SRV records found! Other XMPP servers will try to peer \
             with {hostname} on port 5269. If this is incorrect then peering won't work \
             correctly."
        ),
    }
}

/// Full result of checking one hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XmppDnsReport {
    pub hostname: Hostname,
    /// False when the delegation walk failed and the bootstrap servers were
    /// queried instead.
    pub authoritative: bool,
    pub name_servers: Vec<IpAddr>,
    pub client: CategoryReport,
    pub server: CategoryReport,
}
