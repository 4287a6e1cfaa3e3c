use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::srv::{ServiceClass, SrvService};

/// Diagnostic attached to a displayed SRV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteKind {
    DirectTls,
    NonStandardPort,
    PortReusedBothDifferent,
    PortReusedServiceClassDifferent,
    PortReusedTlsModeDifferent,
}

impl NoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::DirectTls => "DIRECT_TLS",
            NoteKind::NonStandardPort => "NON_STANDARD_PORT",
            NoteKind::PortReusedBothDifferent => "PORT_REUSED_BOTH_DIFFERENT",
            NoteKind::PortReusedServiceClassDifferent => "PORT_REUSED_SERVICE_CLASS_DIFFERENT",
            NoteKind::PortReusedTlsModeDifferent => "PORT_REUSED_TLS_MODE_DIFFERENT",
        }
    }

    /// Port reuse classification between a record's own slot and a colliding one.
    ///
    /// Returns `None` when both slots are the same, which never collides.
    pub fn for_port_reuse(own: SrvService, other: SrvService) -> Option<Self> {
        match (own.class != other.class, own.mode != other.mode) {
            (true, true) => Some(NoteKind::PortReusedBothDifferent),
            (true, false) => Some(NoteKind::PortReusedServiceClassDifferent),
            (false, true) => Some(NoteKind::PortReusedTlsModeDifferent),
            (false, false) => None,
        }
    }

    /// Long explanation shown once per footnote index.
    pub fn footnote(&self, class: ServiceClass) -> String {
        match self {
            NoteKind::DirectTls => "This record advertises Direct TLS (XEP-0368): TLS is \
                negotiated immediately on connect instead of upgrading a plaintext \
                stream with STARTTLS. No port is formally standardized for Direct TLS."
                .to_string(),
            NoteKind::NonStandardPort => {
                let (connection, peers, port) = match class {
                    ServiceClass::Client => ("client-to-server", "clients", 5222),
                    ServiceClass::Server => ("server-to-server", "servers", 5269),
                };
                format!(
                    "The customary port for {connection} connections is {port}. Using a \
                     different port isn't necessarily bad, {peers} that correctly use DNS \
                     SRV records will happily connect to this port, but it is worth \
                     pointing out in case it was an accident."
                )
            }
            NoteKind::PortReusedBothDifferent | NoteKind::PortReusedServiceClassDifferent => {
                "XMPP clients and servers use different handshakes when connecting, so a \
                 single host+port combination cannot accept traffic from both clients and \
                 other servers."
                    .to_string()
            }
            NoteKind::PortReusedTlsModeDifferent => "STARTTLS and Direct TLS connections \
                start differently (plaintext stream versus immediate TLS handshake), so a \
                single host+port combination cannot serve both."
                .to_string(),
        }
    }
}

/// One diagnostic on one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordNote {
    pub kind: NoteKind,
    pub message: String,
}

impl RecordNote {
    pub fn direct_tls() -> Self {
        Self {
            kind: NoteKind::DirectTls,
            message: "INFO Direct TLS".to_string(),
        }
    }

    pub fn non_standard_port() -> Self {
        Self {
            kind: NoteKind::NonStandardPort,
            message: "INFO Non-standard port".to_string(),
        }
    }

    pub fn port_reused(kind: NoteKind, other: SrvService) -> Self {
        Self {
            kind,
            message: format!(
                "ERROR This host+port is also listed for {} {} records",
                other.class, other.mode
            ),
        }
    }
}

/// An SRV record prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub port: u16,
    pub priority: u16,
    pub target: String,
    pub weight: u16,
    pub notes: Vec<RecordNote>,
}

impl DisplayRecord {
    pub fn has_note(&self, kind: NoteKind) -> bool {
        self.notes.iter().any(|note| note.kind == kind)
    }

    pub fn note_kinds(&self) -> Vec<NoteKind> {
        self.notes.iter().map(|note| note.kind).collect()
    }
}

/// Per-category mapping from note kind to its 1-based footnote number,
/// in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootnoteIndex {
    entries: Vec<(NoteKind, u32)>,
}

impl FootnoteIndex {
    /// Assigns indices by scanning `records` in their given order.
    pub fn assign(records: &[DisplayRecord]) -> Self {
        let mut index = Self::default();
        for note in records.iter().flat_map(|record| record.notes.iter()) {
            if index.get(note.kind).is_none() {
                let next = index.entries.len() as u32 + 1;
                index.entries.push((note.kind, next));
            }
        }
        index
    }

    pub fn get(&self, kind: NoteKind) -> Option<u32> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, number)| *number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteKind, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FootnoteIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, number) in &self.entries {
            map.serialize_entry(kind.as_str(), number)?;
        }
        map.end()
    }
}
