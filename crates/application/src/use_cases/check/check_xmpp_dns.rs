use crate::ports::{LookupLedger, NameResolutionClient};
use crate::services::RecordAnnotator;
use crate::use_cases::{LookupSrvRecordsUseCase, ResolveAuthoritativeServersUseCase};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use xmpp_srv_check_domain::{
    CategoryReport, DomainError, Hostname, ServiceClass, SrvAnswers, XmppDnsReport,
};

/// Full lookup for one hostname: ledger entry, sanity check, delegation
/// walk, the four SRV queries and annotation of both service classes.
pub struct CheckXmppDnsUseCase {
    client: Arc<dyn NameResolutionClient>,
    ledger: Arc<dyn LookupLedger>,
    authority: ResolveAuthoritativeServersUseCase,
    srv_lookup: LookupSrvRecordsUseCase,
    authority_fallback: bool,
}

impl CheckXmppDnsUseCase {
    pub fn new(client: Arc<dyn NameResolutionClient>, ledger: Arc<dyn LookupLedger>) -> Self {
        Self {
            authority: ResolveAuthoritativeServersUseCase::new(Arc::clone(&client)),
            srv_lookup: LookupSrvRecordsUseCase::new(Arc::clone(&client)),
            client,
            ledger,
            authority_fallback: false,
        }
    }

    /// Query the bootstrap servers when the delegation walk fails instead of
    /// reporting [`DomainError::AuthorityUndetermined`].
    pub fn with_authority_fallback(mut self, enabled: bool) -> Self {
        self.authority_fallback = enabled;
        self
    }

    pub async fn execute(&self, raw_hostname: &str) -> Result<XmppDnsReport, DomainError> {
        let start = Instant::now();
        let trimmed = raw_hostname.trim();

        if let Err(e) = self.ledger.record(trimmed).await {
            warn!(error = %e, hostname = %trimmed, "Failed to record lookup in ledger");
        }

        let hostname = Hostname::parse(trimmed)?;

        let (authoritative, name_servers) = match self.authority.execute(&hostname).await {
            Ok(servers) => (true, servers),
            Err(DomainError::AuthorityUndetermined { .. }) if self.authority_fallback => {
                warn!(hostname = %hostname, "Authority undetermined, using bootstrap servers");
                (false, self.client.bootstrap_servers())
            }
            Err(e) => return Err(e),
        };

        let answers = self.srv_lookup.execute(&hostname, &name_servers).await?;

        let report = XmppDnsReport {
            client: Self::category(&answers, ServiceClass::Client, &hostname),
            server: Self::category(&answers, ServiceClass::Server, &hostname),
            hostname,
            authoritative,
            name_servers,
        };

        info!(
            hostname = %report.hostname,
            authoritative = report.authoritative,
            client_records = report.client.records.len(),
            server_records = report.server.records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "XMPP DNS check complete"
        );

        Ok(report)
    }

    fn category(answers: &SrvAnswers, class: ServiceClass, hostname: &Hostname) -> CategoryReport {
        let (records, footnote_index) = RecordAnnotator::annotate(answers, class);
        CategoryReport::new(class, hostname, records, footnote_index)
    }
}
