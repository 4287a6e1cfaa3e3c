use serde::Serialize;
use std::fmt;

use crate::hostname::Hostname;

/// Which SRV namespace a query or record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceClass {
    Client,
    Server,
}

impl ServiceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceClass::Client => "client",
            ServiceClass::Server => "server",
        }
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which SRV prefix produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsMode {
    StartTls,
    DirectTls,
}

impl TlsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TlsMode::StartTls => "STARTTLS",
            TlsMode::DirectTls => "Direct TLS",
        }
    }
}

impl fmt::Display for TlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four SRV slots: a (service class, TLS mode) combination.
///
/// The four slots are pairwise distinct, so two answer sets are "the same
/// set" exactly when their services are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SrvService {
    pub class: ServiceClass,
    pub mode: TlsMode,
}

impl SrvService {
    pub const CLIENT_STARTTLS: Self = Self::new(ServiceClass::Client, TlsMode::StartTls);
    pub const CLIENT_DIRECT_TLS: Self = Self::new(ServiceClass::Client, TlsMode::DirectTls);
    pub const SERVER_STARTTLS: Self = Self::new(ServiceClass::Server, TlsMode::StartTls);
    pub const SERVER_DIRECT_TLS: Self = Self::new(ServiceClass::Server, TlsMode::DirectTls);

    /// Slot order used everywhere the four answer sets are enumerated.
    pub const ALL: [Self; 4] = [
        Self::CLIENT_STARTTLS,
        Self::CLIENT_DIRECT_TLS,
        Self::SERVER_STARTTLS,
        Self::SERVER_DIRECT_TLS,
    ];

    pub const fn new(class: ServiceClass, mode: TlsMode) -> Self {
        Self { class, mode }
    }

    pub fn standard_port(&self) -> u16 {
        match (self.class, self.mode) {
            (ServiceClass::Client, TlsMode::StartTls) => 5222,
            (ServiceClass::Client, TlsMode::DirectTls) => 5223,
            (ServiceClass::Server, TlsMode::StartTls) => 5269,
            (ServiceClass::Server, TlsMode::DirectTls) => 5270,
        }
    }

    pub fn service_label(&self) -> &'static str {
        match (self.class, self.mode) {
            (ServiceClass::Client, TlsMode::StartTls) => "_xmpp-client._tcp",
            (ServiceClass::Client, TlsMode::DirectTls) => "_xmpps-client._tcp",
            (ServiceClass::Server, TlsMode::StartTls) => "_xmpp-server._tcp",
            (ServiceClass::Server, TlsMode::DirectTls) => "_xmpps-server._tcp",
        }
    }

    pub fn query_name(&self, domain: &Hostname) -> String {
        format!("{}.{}", self.service_label(), domain)
    }
}

impl fmt::Display for SrvService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class, self.mode)
    }
}

/// A single SRV answer, target kept in trailing-dot form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SrvRecord {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

impl SrvRecord {
    pub fn new(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        let mut target = target.into();
        if !target.ends_with('.') {
            target.push('.');
        }
        Self {
            priority,
            weight,
            port,
            target,
        }
    }

    /// Target without its trailing dot, as shown to users.
    pub fn display_target(&self) -> &str {
        self.target.strip_suffix('.').unwrap_or(&self.target)
    }

    pub fn same_endpoint(&self, other: &SrvRecord) -> bool {
        self.port == other.port && self.target.eq_ignore_ascii_case(&other.target)
    }
}

/// Outcome of one SRV query.
///
/// `present == false` means the query failed or had no answer, which is
/// distinct from a present answer with zero records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub service: SrvService,
    pub records: Vec<SrvRecord>,
    pub present: bool,
}

impl AnswerSet {
    pub fn present(service: SrvService, records: Vec<SrvRecord>) -> Self {
        Self {
            service,
            records,
            present: true,
        }
    }

    pub fn absent(service: SrvService) -> Self {
        Self {
            service,
            records: Vec::new(),
            present: false,
        }
    }

    pub fn service_class(&self) -> ServiceClass {
        self.service.class
    }

    pub fn tls_mode(&self) -> TlsMode {
        self.service.mode
    }

    /// Records visible to the annotator; an absent set contributes none.
    pub fn visible_records(&self) -> &[SrvRecord] {
        if self.present {
            &self.records
        } else {
            &[]
        }
    }

    pub fn contains_endpoint(&self, record: &SrvRecord) -> bool {
        self.visible_records()
            .iter()
            .any(|candidate| candidate.same_endpoint(record))
    }
}

/// The four SRV answer sets, one fixed slot per [`SrvService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvAnswers {
    client_starttls: AnswerSet,
    client_direct_tls: AnswerSet,
    server_starttls: AnswerSet,
    server_direct_tls: AnswerSet,
}

impl SrvAnswers {
    /// All four slots absent.
    pub fn empty() -> Self {
        Self {
            client_starttls: AnswerSet::absent(SrvService::CLIENT_STARTTLS),
            client_direct_tls: AnswerSet::absent(SrvService::CLIENT_DIRECT_TLS),
            server_starttls: AnswerSet::absent(SrvService::SERVER_STARTTLS),
            server_direct_tls: AnswerSet::absent(SrvService::SERVER_DIRECT_TLS),
        }
    }

    /// Stores `answers` in the slot named by its own service.
    pub fn insert(&mut self, answers: AnswerSet) {
        let service = answers.service;
        *self.slot_mut(service) = answers;
    }

    pub fn with(mut self, answers: AnswerSet) -> Self {
        self.insert(answers);
        self
    }

    pub fn get(&self, service: SrvService) -> &AnswerSet {
        match (service.class, service.mode) {
            (ServiceClass::Client, TlsMode::StartTls) => &self.client_starttls,
            (ServiceClass::Client, TlsMode::DirectTls) => &self.client_direct_tls,
            (ServiceClass::Server, TlsMode::StartTls) => &self.server_starttls,
            (ServiceClass::Server, TlsMode::DirectTls) => &self.server_direct_tls,
        }
    }

    fn slot_mut(&mut self, service: SrvService) -> &mut AnswerSet {
        match (service.class, service.mode) {
            (ServiceClass::Client, TlsMode::StartTls) => &mut self.client_starttls,
            (ServiceClass::Client, TlsMode::DirectTls) => &mut self.client_direct_tls,
            (ServiceClass::Server, TlsMode::StartTls) => &mut self.server_starttls,
            (ServiceClass::Server, TlsMode::DirectTls) => &mut self.server_direct_tls,
        }
    }

    /// Slots in [`SrvService::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &AnswerSet> {
        SrvService::ALL.into_iter().map(move |service| self.get(service))
    }
}

impl Default for SrvAnswers {
    fn default() -> Self {
        Self::empty()
    }
}
