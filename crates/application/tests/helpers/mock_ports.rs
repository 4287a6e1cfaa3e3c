#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, RwLock};
use xmpp_srv_check_application::ports::{LookupLedger, NameResolutionClient};
use xmpp_srv_check_domain::{DomainError, SrvRecord};

/// One recorded call on [`MockNameResolutionClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ns { name: String, servers: Vec<IpAddr> },
    Addresses { name: String, servers: Vec<IpAddr> },
    Srv { name: String, servers: Vec<IpAddr> },
}

impl Call {
    pub fn name(&self) -> &str {
        match self {
            Call::Ns { name, .. } | Call::Addresses { name, .. } | Call::Srv { name, .. } => name,
        }
    }

    pub fn servers(&self) -> &[IpAddr] {
        match self {
            Call::Ns { servers, .. }
            | Call::Addresses { servers, .. }
            | Call::Srv { servers, .. } => servers,
        }
    }
}

/// Answers keyed by query name. Names with no configured answer fail with
/// [`DomainError::NoAnswer`].
#[derive(Clone)]
pub struct MockNameResolutionClient {
    bootstrap: Vec<IpAddr>,
    ns: Arc<RwLock<HashMap<String, Vec<String>>>>,
    addresses: Arc<RwLock<HashMap<String, Vec<IpAddr>>>>,
    srv: Arc<RwLock<HashMap<String, Vec<SrvRecord>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<RwLock<Vec<Call>>>,
}

impl MockNameResolutionClient {
    pub fn new(bootstrap: Vec<IpAddr>) -> Self {
        Self {
            bootstrap,
            ns: Arc::new(RwLock::new(HashMap::new())),
            addresses: Arc::new(RwLock::new(HashMap::new())),
            srv: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_ns(&self, zone: &str, targets: &[&str]) {
        self.ns.write().unwrap().insert(
            zone.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        );
    }

    pub fn set_addresses(&self, host: &str, addresses: Vec<IpAddr>) {
        self.addresses
            .write()
            .unwrap()
            .insert(host.to_string(), addresses);
    }

    pub fn set_srv(&self, name: &str, records: Vec<SrvRecord>) {
        self.srv.write().unwrap().insert(name.to_string(), records);
    }

    /// Fails every lookup of `name`, whatever its type.
    pub fn set_error(&self, name: &str, error: DomainError) {
        self.errors.write().unwrap().insert(name.to_string(), error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn srv_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Srv { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.write().unwrap().push(call);
    }

    fn lookup<T: Clone>(
        &self,
        name: &str,
        table: &RwLock<HashMap<String, T>>,
    ) -> Result<T, DomainError> {
        if let Some(error) = self.errors.read().unwrap().get(name) {
            return Err(error.clone());
        }
        table
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or(DomainError::NoAnswer)
    }
}

#[async_trait]
impl NameResolutionClient for MockNameResolutionClient {
    fn bootstrap_servers(&self) -> Vec<IpAddr> {
        self.bootstrap.clone()
    }

    async fn lookup_ns(&self, domain: &str, servers: &[IpAddr]) -> Result<Vec<String>, DomainError> {
        self.record(Call::Ns {
            name: domain.to_string(),
            servers: servers.to_vec(),
        });
        self.lookup(domain, &self.ns)
    }

    async fn lookup_addresses(
        &self,
        host: &str,
        servers: &[IpAddr],
    ) -> Result<Vec<IpAddr>, DomainError> {
        self.record(Call::Addresses {
            name: host.to_string(),
            servers: servers.to_vec(),
        });
        self.lookup(host, &self.addresses)
    }

    async fn lookup_srv(
        &self,
        name: &str,
        servers: &[IpAddr],
    ) -> Result<Vec<SrvRecord>, DomainError> {
        self.record(Call::Srv {
            name: name.to_string(),
            servers: servers.to_vec(),
        });
        self.lookup(name, &self.srv)
    }
}

#[derive(Clone, Default)]
pub struct MockLookupLedger {
    entries: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockLookupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.read().unwrap().clone()
    }
}

#[async_trait]
impl LookupLedger for MockLookupLedger {
    async fn record(&self, hostname: &str) -> Result<(), DomainError> {
        self.entries.write().unwrap().push(hostname.to_string());
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Io("ledger unavailable".to_string()));
        }
        Ok(())
    }
}
