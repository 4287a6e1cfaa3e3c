use crate::ports::NameResolutionClient;
use futures::future::join_all;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use xmpp_srv_check_domain::{AnswerSet, DomainError, Hostname, SrvAnswers, SrvService};

/// Issues the four XMPP SRV queries (client/server, STARTTLS/Direct TLS)
/// against one server set.
///
/// The queries run concurrently and are independent: a lookup failure only
/// marks its own slot absent. Errors outside the lookup taxonomy are returned.
pub struct LookupSrvRecordsUseCase {
    client: Arc<dyn NameResolutionClient>,
}

impl LookupSrvRecordsUseCase {
    pub fn new(client: Arc<dyn NameResolutionClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, domain, servers), fields(domain = %domain))]
    pub async fn execute(
        &self,
        domain: &Hostname,
        servers: &[IpAddr],
    ) -> Result<SrvAnswers, DomainError> {
        let lookups = SrvService::ALL.map(|service| self.lookup_one(service, domain, servers));

        let mut answers = SrvAnswers::empty();
        for result in join_all(lookups).await {
            answers.insert(result?);
        }

        Ok(answers)
    }

    async fn lookup_one(
        &self,
        service: SrvService,
        domain: &Hostname,
        servers: &[IpAddr],
    ) -> Result<AnswerSet, DomainError> {
        let name = service.query_name(domain);

        match self.client.lookup_srv(&name, servers).await {
            Ok(records) => {
                debug!(query = %name, records = records.len(), "SRV answer received");
                Ok(AnswerSet::present(service, records))
            }
            Err(e) if e.is_lookup_failure() => {
                warn!(query = %name, status = e.status(), "No SRV answer");
                Ok(AnswerSet::absent(service))
            }
            Err(e) => Err(e),
        }
    }
}
